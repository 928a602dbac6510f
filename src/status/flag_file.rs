//! File-backed donation flags
//!
//! Reads the received-flag list out of a JSON document on disk:
//!
//! ```json
//! { "mail_received": ["AquariumDonated:Carp", "ccDoorUnlock"] }
//! ```
//!
//! The file is only read on [`FlagFile::refresh`]. Until a refresh
//! succeeds every query reports the store as unavailable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::error::StatusError;
use super::oracle::{DonationKey, DonationStatusOracle, MailFlags};

#[derive(Debug, Deserialize)]
struct MailDocument {
    #[serde(default)]
    mail_received: Vec<String>,
}

pub struct FlagFile {
    path: PathBuf,
    flags: Option<MailFlags>,
}

impl FlagFile {
    /// Creates a store for `path` without reading it
    pub fn new(path: impl AsRef<Path>) -> Self {
        FlagFile {
            path: path.as_ref().to_path_buf(),
            flags: None,
        }
    }

    /// Creates a store and reads it once
    ///
    /// A failed read is logged and leaves the store unavailable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self::new(path);
        if let Err(err) = store.refresh() {
            warn!(path = %store.path.display(), %err, "donation flags not loaded");
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.flags.is_some()
    }

    /// Re-reads the file
    ///
    /// On failure the previous snapshot is dropped, so stale flags are
    /// never reported.
    pub fn refresh(&mut self) -> Result<(), StatusError> {
        self.flags = None;

        let json = fs::read_to_string(&self.path)?;
        let document: MailDocument = serde_json::from_str(&json)?;
        let flags: MailFlags = document.mail_received.into_iter().collect();

        debug!(path = %self.path.display(), count = flags.len(), "donation flags loaded");
        self.flags = Some(flags);
        Ok(())
    }
}

impl DonationStatusOracle for FlagFile {
    fn is_resolved(&self, key: &DonationKey) -> Result<bool, StatusError> {
        match &self.flags {
            Some(flags) => flags.is_resolved(key),
            None => Err(StatusError::Unavailable(self.path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::status::oracle::{query_status, DonationStatus};

    #[test]
    fn test_reads_received_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{ "mail_received": ["AquariumDonated:Carp", "spring_1"] }"#).unwrap();

        let store = FlagFile::open(&path);
        assert!(store.is_loaded());
        assert_eq!(store.path(), path.as_path());
        assert_eq!(query_status(&store, &Item::fish("Carp")), DonationStatus::Resolved);
        assert_eq!(query_status(&store, &Item::fish("Pike")), DonationStatus::Unresolved);
    }

    #[test]
    fn test_missing_field_means_no_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{}").unwrap();

        let store = FlagFile::open(&path);
        assert_eq!(query_status(&store, &Item::fish("Carp")), DonationStatus::Unresolved);
    }

    #[test]
    fn test_missing_file_fails_closed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FlagFile::new(dir.path().join("absent.json"));

        assert!(matches!(store.refresh(), Err(StatusError::Io(_))));
        assert!(!store.is_loaded());
        assert_eq!(query_status(&store, &Item::fish("Carp")), DonationStatus::Unknown);
    }

    #[test]
    fn test_corrupt_file_drops_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{ "mail_received": [] }"#).unwrap();

        let mut store = FlagFile::open(&path);
        assert!(store.is_loaded());

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(store.refresh(), Err(StatusError::Malformed(_))));
        assert_eq!(query_status(&store, &Item::fish("Carp")), DonationStatus::Unknown);
    }
}
