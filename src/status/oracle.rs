use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::item::Item;

use super::error::StatusError;

/// Namespace of the flags written when a fish is donated.
pub const DONATION_FLAG_PREFIX: &str = "AquariumDonated:";

/// Flag name recording that one item has been donated
///
/// Built from the item name with all whitespace removed, so
/// `"Largemouth Bass"` becomes `"AquariumDonated:LargemouthBass"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DonationKey(String);

impl DonationKey {
    pub fn for_item(item: &Item) -> Result<Self, StatusError> {
        let compact: String = item.name.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(StatusError::InvalidKey(item.name.clone()));
        }
        Ok(DonationKey(format!("{DONATION_FLAG_PREFIX}{compact}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DonationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only view of the host's persistent donation flags
pub trait DonationStatusOracle {
    /// True if the flag for `key` is present
    fn is_resolved(&self, key: &DonationKey) -> Result<bool, StatusError>;

    /// True if the flag for `key` is absent
    fn is_unresolved(&self, key: &DonationKey) -> Result<bool, StatusError> {
        self.is_resolved(key).map(|resolved| !resolved)
    }
}

/// Outcome of a status query for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationStatus {
    Resolved,
    Unresolved,
    /// The store could not answer
    Unknown,
}

/// Asks `oracle` about `item`, folding every error into [`DonationStatus::Unknown`]
pub fn query_status<O>(oracle: &O, item: &Item) -> DonationStatus
where
    O: DonationStatusOracle + ?Sized,
{
    let answer = DonationKey::for_item(item).and_then(|key| oracle.is_unresolved(&key));
    match answer {
        Ok(true) => DonationStatus::Unresolved,
        Ok(false) => DonationStatus::Resolved,
        Err(err) => {
            debug!(item = %item.name, %err, "donation status unavailable");
            DonationStatus::Unknown
        }
    }
}

/// In-memory flag set, for hosts that already hold the received flags
#[derive(Debug, Clone, Default)]
pub struct MailFlags {
    received: HashSet<String>,
}

impl MailFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: impl Into<String>) -> bool {
        self.received.insert(flag.into())
    }

    pub fn remove(&mut self, flag: &str) -> bool {
        self.received.remove(flag)
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.received.contains(flag)
    }

    /// Flips the flag and returns whether it is now set
    pub fn toggle(&mut self, flag: &str) -> bool {
        if self.remove(flag) {
            false
        } else {
            self.insert(flag);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.received.len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MailFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MailFlags {
            received: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl DonationStatusOracle for MailFlags {
    fn is_resolved(&self, key: &DonationKey) -> Result<bool, StatusError> {
        Ok(self.contains(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct OfflineStore;

    impl DonationStatusOracle for OfflineStore {
        fn is_resolved(&self, _key: &DonationKey) -> Result<bool, StatusError> {
            Err(StatusError::Unavailable(PathBuf::from("save.json")))
        }
    }

    #[test]
    fn test_key_strips_whitespace() {
        let key = DonationKey::for_item(&Item::fish("Largemouth Bass")).unwrap();
        assert_eq!(key.as_str(), "AquariumDonated:LargemouthBass");

        let key = DonationKey::for_item(&Item::fish(" Sea\tCucumber ")).unwrap();
        assert_eq!(key.to_string(), "AquariumDonated:SeaCucumber");
    }

    #[test]
    fn test_blank_name_is_invalid_key() {
        let err = DonationKey::for_item(&Item::fish("   ")).unwrap_err();
        assert!(matches!(err, StatusError::InvalidKey(_)));
    }

    #[test]
    fn test_present_flag_is_resolved() {
        let flags: MailFlags = ["AquariumDonated:Carp"].into_iter().collect();
        assert_eq!(query_status(&flags, &Item::fish("Carp")), DonationStatus::Resolved);
        assert_eq!(query_status(&flags, &Item::fish("Pike")), DonationStatus::Unresolved);
    }

    #[test]
    fn test_errors_fold_into_unknown() {
        assert_eq!(query_status(&OfflineStore, &Item::fish("Carp")), DonationStatus::Unknown);

        let flags = MailFlags::new();
        assert_eq!(query_status(&flags, &Item::fish("")), DonationStatus::Unknown);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut flags = MailFlags::new();
        assert!(flags.toggle("AquariumDonated:Carp"));
        assert!(flags.contains("AquariumDonated:Carp"));
        assert!(!flags.toggle("AquariumDonated:Carp"));
        assert!(flags.is_empty());

        assert!(flags.insert("AquariumDonated:Pike"));
        assert!(!flags.insert("AquariumDonated:Pike"));
        assert_eq!(flags.len(), 1);
        assert!(flags.remove("AquariumDonated:Pike"));
        assert!(!flags.remove("AquariumDonated:Pike"));
    }
}
