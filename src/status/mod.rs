//! Donation status lookups
//!
//! - `oracle`: the DonationStatusOracle trait, key format, in-memory flags
//! - `flag_file`: JSON file-backed flag store
//! - `error`: StatusError

pub mod error;
pub mod flag_file;
pub mod oracle;

pub use error::StatusError;
pub use flag_file::FlagFile;
pub use oracle::{
    query_status, DonationKey, DonationStatus, DonationStatusOracle, MailFlags,
    DONATION_FLAG_PREFIX,
};
