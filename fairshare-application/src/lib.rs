#![warn(clippy::uninlined_format_args)]

pub mod analytics;
pub mod error;
pub mod ledger;
pub mod ports;
pub mod summary;

pub use analytics::SpendingReport;
pub use error::LedgerError;
pub use ledger::{ExpenseDraft, Ledger};
pub use ports::ParticipantDirectory;
pub use summary::compute_settlement_summary;
