//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::account::STARTING_MONEY;
use crate::options::{DEFAULT_ACCOUNT_PATH, DEFAULT_DECK_PATH, SessionOptions};

/// Play blackjack in the terminal against a fixed-policy dealer.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON list of card tokens making up the deck
    #[arg(long, default_value = DEFAULT_DECK_PATH)]
    pub deck: PathBuf,
    /// JSON file holding the saved balance
    #[arg(long, default_value = DEFAULT_ACCOUNT_PATH)]
    pub account: PathBuf,
    /// Seed for shuffling, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
    /// Balance given when no saved account exists
    #[arg(long, default_value_t = STARTING_MONEY)]
    pub starting_balance: usize,
}

impl From<Cli> for SessionOptions {
    fn from(cli: Cli) -> Self {
        Self::default()
            .with_deck_path(cli.deck)
            .with_account_path(cli.account)
            .with_seed(cli.seed)
            .with_starting_money(cli.starting_balance)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults_match_session_options() {
        let cli = Cli::try_parse_from(["bjterm"]).unwrap();
        assert_eq!(SessionOptions::from(cli), SessionOptions::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "bjterm",
            "--deck",
            "cards.json",
            "--account",
            "save.json",
            "--seed",
            "12",
            "--starting-balance",
            "250",
        ])
        .unwrap();
        let options = SessionOptions::from(cli);
        assert_eq!(options.deck_path, Path::new("cards.json"));
        assert_eq!(options.account_path, Path::new("save.json"));
        assert_eq!(options.seed, Some(12));
        assert_eq!(options.starting_money, 250);
    }
}
