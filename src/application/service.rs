use chrono::NaiveDate;

use crate::domain::{Account, Cents, Directory, Ledger, User};

use super::AppError;

/// The explicit session-state object: one ledger plus one user directory,
/// created at startup and discarded on exit. This is the primary interface
/// for any client (the menu loop, tests).
#[derive(Debug, Default)]
pub struct TellerService {
    ledger: Ledger,
    directory: Directory,
}

impl TellerService {
    /// Create a fresh session: zero balance, no users, no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Ledger operations
    // ========================

    /// Deposit funds. Returns the operation-log entry for display.
    pub fn deposit(&mut self, amount: Cents) -> Result<&str, AppError> {
        Ok(self.ledger.deposit(amount)?)
    }

    /// Withdraw funds, subject to the per-transaction limit and session cap.
    /// Returns the operation-log entry for display.
    pub fn withdraw(&mut self, amount: Cents) -> Result<&str, AppError> {
        Ok(self.ledger.withdraw(amount)?)
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn withdrawals(&self) -> u32 {
        self.ledger.withdrawals()
    }

    /// The operation log, oldest first. Read-only; rendering is the caller's job.
    pub fn operations(&self) -> &[String] {
        self.ledger.operations()
    }

    // ========================
    // Directory operations
    // ========================

    pub fn has_user(&self, tax_id: &str) -> bool {
        self.directory.contains_user(tax_id)
    }

    pub fn user(&self, tax_id: &str) -> Option<&User> {
        self.directory.user(tax_id)
    }

    pub fn create_user(
        &mut self,
        tax_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<&User, AppError> {
        Ok(self.directory.create_user(tax_id, name, address, birth_date)?)
    }

    pub fn create_account(&mut self, tax_id: &str) -> Result<&Account, AppError> {
        Ok(self.directory.create_account(tax_id)?)
    }

    pub fn accounts(&self) -> &[Account] {
        self.directory.accounts()
    }
}
