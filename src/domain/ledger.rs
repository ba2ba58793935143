use super::{Cents, format_cents};

/// Per-transaction withdrawal limit.
pub const WITHDRAWAL_LIMIT: Cents = 500_00;

/// Maximum number of successful withdrawals per session.
pub const MAX_WITHDRAWALS: u32 = 3;

/// The session ledger: balance, withdrawal counter, and the operation log.
///
/// The log is append-only and insertion-ordered; entries are the exact
/// human-readable lines shown in a statement. Everything here lives for one
/// process run and is discarded on exit.
#[derive(Debug, Default)]
pub struct Ledger {
    balance: Cents,
    withdrawals: u32,
    operations: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn operations(&self) -> &[String] {
        &self.operations
    }

    /// Add funds to the balance and log the operation.
    ///
    /// Returns the log entry just appended. A negative amount is rejected and
    /// leaves the ledger untouched.
    pub fn deposit(&mut self, amount: Cents) -> Result<&str, LedgerError> {
        if amount < 0 {
            return Err(LedgerError::NegativeAmount);
        }

        self.balance += amount;
        self.operations.push(format!(
            "Deposited ${}, new balance: ${}",
            format_cents(amount),
            format_cents(self.balance)
        ));
        Ok(self.operations.last().unwrap())
    }

    /// Take funds from the balance, count the withdrawal, and log the operation.
    ///
    /// Returns the log entry just appended. On rejection the ledger is untouched
    /// and the error carries the reason.
    pub fn withdraw(&mut self, amount: Cents) -> Result<&str, LedgerError> {
        validate_withdrawal(amount, self.balance, self.withdrawals)?;

        self.balance -= amount;
        self.withdrawals += 1;
        self.operations.push(format!(
            "Withdrew ${}, new balance: ${}",
            format_cents(amount),
            format_cents(self.balance)
        ));
        Ok(self.operations.last().unwrap())
    }
}

/// Decide whether a withdrawal is allowed, without touching any state.
///
/// Rules are evaluated in this exact order and the first failure wins:
/// negative amount, insufficient funds, per-transaction limit, session cap.
/// A request that is simultaneously over-limit and over-cap must therefore
/// report the limit, not the cap.
pub fn validate_withdrawal(
    amount: Cents,
    balance: Cents,
    withdrawals: u32,
) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount);
    }
    if amount > balance {
        return Err(LedgerError::InsufficientFunds);
    }
    if amount > WITHDRAWAL_LIMIT {
        return Err(LedgerError::OverWithdrawalLimit);
    }
    if withdrawals >= MAX_WITHDRAWALS {
        return Err(LedgerError::TooManyWithdrawals);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    NegativeAmount,
    InsufficientFunds,
    OverWithdrawalLimit,
    TooManyWithdrawals,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            LedgerError::NegativeAmount => "Invalid amount. Please enter a positive number.",
            LedgerError::InsufficientFunds => "Insufficient funds.",
            LedgerError::OverWithdrawalLimit => "Exceeded withdrawal limit.",
            LedgerError::TooManyWithdrawals => "Exceeded maximum number of withdrawals.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for LedgerError {}
