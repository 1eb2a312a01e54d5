//! Player account persistence.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AccountError;

/// Balance given to a player with no saved account.
pub const STARTING_MONEY: usize = 1000;

/// The persisted player account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Current balance.
    pub money: usize,
}

impl Account {
    /// Creates an account with the given balance.
    #[must_use]
    pub const fn new(money: usize) -> Self {
        Self { money }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(STARTING_MONEY)
    }
}

/// Reads and writes the account record as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the saved account, creating it with `starting_money` when there
    /// is none.
    ///
    /// A missing, unreadable, or malformed file counts as no saved account;
    /// the new account is written back immediately.
    ///
    /// # Errors
    ///
    /// Returns an error only if the new account cannot be written.
    pub fn load_or_create(&self, starting_money: usize) -> Result<Account, AccountError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(account) => {
                    log::info!("loaded account from {}", self.path.display());
                    return Ok(account);
                }
                Err(err) => {
                    log::warn!(
                        "ignoring malformed account file {}: {err}",
                        self.path.display()
                    );
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no saved account at {}", self.path.display());
            }
            Err(err) => {
                log::warn!("cannot read account file {}: {err}", self.path.display());
            }
        }

        let account = Account::new(starting_money);
        self.save(&account)?;
        Ok(account)
    }

    /// Writes the account to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be serialized or written.
    pub fn save(&self, account: &Account) -> Result<(), AccountError> {
        let text = serde_json::to_string_pretty(account)?;
        fs::write(&self.path, text).map_err(|source| AccountError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved balance {} to {}", account.money, self.path.display());
        Ok(())
    }
}
