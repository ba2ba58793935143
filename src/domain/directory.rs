use std::collections::HashMap;

use chrono::NaiveDate;

/// Branch code stamped on every account.
pub const BRANCH_CODE: &str = "0001";

/// An account holder, keyed by tax id in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub tax_id: String,
    pub name: String,
    pub address: String,
    pub birth_date: NaiveDate,
    /// Numbers of the accounts this user owns, in creation order.
    pub accounts: Vec<u32>,
}

impl User {
    pub fn new(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
            address: address.into(),
            birth_date,
            accounts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Tax id of the owning user.
    pub owner: String,
    pub branch: String,
    /// 1-based, assigned sequentially in creation order.
    pub number: u32,
}

/// The user directory and the global account list.
///
/// Account numbers are unique by construction: the list is append-only and the
/// next number is always `accounts.len() + 1`.
#[derive(Debug, Default)]
pub struct Directory {
    users: HashMap<String, User>,
    accounts: Vec<Account>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, tax_id: &str) -> Option<&User> {
        self.users.get(tax_id)
    }

    pub fn contains_user(&self, tax_id: &str) -> bool {
        self.users.contains_key(tax_id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Insert a new user with an empty account list.
    ///
    /// Rejects a tax id that is already present and leaves the directory
    /// unchanged in that case.
    pub fn create_user(
        &mut self,
        tax_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<&User, DirectoryError> {
        let tax_id = tax_id.into();
        if self.users.contains_key(&tax_id) {
            return Err(DirectoryError::DuplicateUser);
        }

        let user = User::new(tax_id.clone(), name, address, birth_date);
        Ok(self.users.entry(tax_id).or_insert(user))
    }

    /// Open the next account for an existing user.
    ///
    /// The account lands on both the global list and the owner's own list.
    /// An unknown tax id is rejected and nothing changes.
    pub fn create_account(&mut self, tax_id: &str) -> Result<&Account, DirectoryError> {
        let user = self
            .users
            .get_mut(tax_id)
            .ok_or(DirectoryError::UnknownUser)?;

        let account = Account {
            owner: tax_id.to_owned(),
            branch: BRANCH_CODE.to_owned(),
            number: self.accounts.len() as u32 + 1,
        };
        user.accounts.push(account.number);
        self.accounts.push(account);
        Ok(self.accounts.last().unwrap())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryError {
    DuplicateUser,
    UnknownUser,
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DirectoryError::DuplicateUser => "User already exists.",
            DirectoryError::UnknownUser => "User not found.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DirectoryError {}
