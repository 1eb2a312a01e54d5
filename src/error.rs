//! Error types for game operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is empty.
    #[error("card token is empty")]
    Empty,
    /// The token does not start with a known rank.
    #[error("unknown rank in card token {0:?}")]
    UnknownRank(String),
}

/// Errors that can occur while loading the deck configuration.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The deck file could not be read.
    #[error("cannot read deck file {}", .path.display())]
    Read {
        /// Path of the deck file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The deck file is not a JSON list of card tokens.
    #[error("invalid deck file {}", .path.display())]
    Parse {
        /// Path of the deck file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A card token in the deck file is malformed.
    #[error("invalid card at position {index}")]
    InvalidCard {
        /// Position of the token in the list.
        index: usize,
        /// Why the token was rejected.
        source: CardError,
    },
    /// The deck has no cards.
    #[error("deck has no cards")]
    Empty,
}

/// Errors that can occur while saving the player account.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The account could not be serialized.
    #[error("cannot serialize account")]
    Serialize(#[from] serde_json::Error),
    /// The account file could not be written.
    #[error("cannot write account file {}", .path.display())]
    Write {
        /// Path of the account file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet input is not a whole number.
    #[error("bet is not a number")]
    NotANumber,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is negative.
    #[error("bet amount is negative")]
    NegativeBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// Paying out the bet would overflow the player's money.
    #[error("winnings overflow the player's balance")]
    BalanceOverflow,
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The console could not be read or written.
    #[error("console i/o failed")]
    Console(#[from] io::Error),
    /// The balance could not be persisted.
    #[error(transparent)]
    Account(#[from] AccountError),
    /// A bet was rejected by the game.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
