//! Session configuration options.

use std::path::PathBuf;

use crate::account::STARTING_MONEY;

/// Default location of the deck configuration.
pub const DEFAULT_DECK_PATH: &str = "deck.json";

/// Default location of the account record.
pub const DEFAULT_ACCOUNT_PATH: &str = "user.json";

/// Configuration for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_deck_path("cards/deck.json")
///     .with_seed(Some(7))
///     .with_starting_money(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Path of the deck configuration (JSON list of card tokens).
    pub deck_path: PathBuf,
    /// Path of the account record.
    pub account_path: PathBuf,
    /// Shuffle seed; a random seed is drawn when `None`.
    pub seed: Option<u64>,
    /// Balance of a newly created account.
    pub starting_money: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            deck_path: PathBuf::from(DEFAULT_DECK_PATH),
            account_path: PathBuf::from(DEFAULT_ACCOUNT_PATH),
            seed: None,
            starting_money: STARTING_MONEY,
        }
    }
}

impl SessionOptions {
    /// Sets the deck configuration path.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use bjterm::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_deck_path("my-deck.json");
    /// assert_eq!(options.deck_path, Path::new("my-deck.json"));
    /// ```
    #[must_use]
    pub fn with_deck_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck_path = path.into();
        self
    }

    /// Sets the account record path.
    #[must_use]
    pub fn with_account_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.account_path = path.into();
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_seed(Some(42));
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the balance of a newly created account.
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Returns the configured seed, or a fresh random one.
    #[must_use]
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
