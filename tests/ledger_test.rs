mod common;

use anyhow::Result;
use common::funded_session;
use teller::application::{AppError, TellerService};
use teller::domain::{LedgerError, MAX_WITHDRAWALS, WITHDRAWAL_LIMIT, parse_cents};

#[test]
fn test_deposit_then_over_balance_withdrawal_then_valid_withdrawal() -> Result<()> {
    // Starting balance 0.00
    let mut service = TellerService::new();

    let entry = service.deposit(parse_cents("100.00")?)?.to_owned();
    assert_eq!(entry, "Deposited $100.00, new balance: $100.00");
    assert_eq!(service.balance(), 100_00);
    assert_eq!(service.operations(), &[entry]);

    // 600.00 exceeds both the balance and the 500.00 limit; the balance rule
    // is checked first, so this must read as insufficient funds
    let err = service.withdraw(parse_cents("600.00")?).unwrap_err();
    assert_eq!(err, AppError::Ledger(LedgerError::InsufficientFunds));
    assert_eq!(err.to_string(), "Insufficient funds.");
    assert_eq!(service.balance(), 100_00);
    assert_eq!(service.withdrawals(), 0);

    let entry = service.withdraw(parse_cents("50.00")?)?.to_owned();
    assert_eq!(entry, "Withdrew $50.00, new balance: $50.00");
    assert_eq!(service.balance(), 50_00);
    assert_eq!(service.withdrawals(), 1);
    assert_eq!(service.operations().len(), 2);

    Ok(())
}

#[test]
fn test_over_limit_withdrawal_rejected_with_limit_message() -> Result<()> {
    let mut service = funded_session(1000_00)?;

    let err = service.withdraw(WITHDRAWAL_LIMIT + 1).unwrap_err();
    assert_eq!(err.to_string(), "Exceeded withdrawal limit.");
    assert_eq!(service.balance(), 1000_00);

    // exactly at the limit goes through
    service.withdraw(WITHDRAWAL_LIMIT)?;
    assert_eq!(service.balance(), 500_00);

    Ok(())
}

#[test]
fn test_fourth_withdrawal_rejected() -> Result<()> {
    let mut service = funded_session(1000_00)?;

    for _ in 0..MAX_WITHDRAWALS {
        service.withdraw(10_00)?;
    }
    assert_eq!(service.withdrawals(), 3);

    let err = service.withdraw(10_00).unwrap_err();
    assert_eq!(err.to_string(), "Exceeded maximum number of withdrawals.");
    assert_eq!(service.balance(), 970_00);
    assert_eq!(service.withdrawals(), 3);
    assert_eq!(service.operations().len(), 4); // 1 deposit + 3 withdrawals

    Ok(())
}

#[test]
fn test_negative_amounts_rejected_everywhere() -> Result<()> {
    let mut service = funded_session(100_00)?;

    let err = service.deposit(-5_00).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid amount. Please enter a positive number."
    );

    // negative wins over every other withdrawal rule
    let err = service.withdraw(-600_00).unwrap_err();
    assert_eq!(err, AppError::Ledger(LedgerError::NegativeAmount));

    assert_eq!(service.balance(), 100_00);
    assert_eq!(service.operations().len(), 1);

    Ok(())
}

#[test]
fn test_non_numeric_amount_fails_at_the_parse_boundary() {
    assert!(parse_cents("ten dollars").is_err());
    assert!(parse_cents("10x").is_err());
    assert!(parse_cents("").is_err());
}

#[test]
fn test_log_entries_keep_insertion_order() -> Result<()> {
    let mut service = TellerService::new();
    service.deposit(300_00)?;
    service.withdraw(100_00)?;
    service.deposit(25_50)?;

    assert_eq!(
        service.operations(),
        &[
            "Deposited $300.00, new balance: $300.00",
            "Withdrew $100.00, new balance: $200.00",
            "Deposited $25.50, new balance: $225.50",
        ]
    );
    Ok(())
}
