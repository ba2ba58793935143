// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use teller::application::TellerService;
use teller::domain::Cents;

/// Helper to parse a yyyy-mm-dd birth date
pub fn parse_birth_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to create a session with an opening deposit
pub fn funded_session(amount: Cents) -> Result<TellerService> {
    let mut service = TellerService::new();
    service.deposit(amount)?;
    Ok(service)
}

/// Test fixture: standard user setup
pub struct StandardUsers;

impl StandardUsers {
    pub const ANA: &str = "11122233344";
    pub const BRUNO: &str = "55566677788";

    /// Register the two standard users, no accounts yet
    pub fn create(service: &mut TellerService) -> Result<()> {
        service.create_user(
            Self::ANA,
            "Ana Silva",
            "1 Main St",
            parse_birth_date("1990-04-12"),
        )?;
        service.create_user(
            Self::BRUNO,
            "Bruno Costa",
            "2 Oak Ave",
            parse_birth_date("1985-11-30"),
        )?;
        Ok(())
    }
}
