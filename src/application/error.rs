use thiserror::Error;

use crate::domain::{DirectoryError, LedgerError};

/// Unified error for session operations.
///
/// `Display` is the exact line shown to the user; every variant is a business
/// rejection that leaves the session state unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
