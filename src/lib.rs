//! A single-player terminal blackjack game with a persisted balance.
//!
//! The crate provides a [`Game`] type that runs one round at a time:
//! betting, dealing, hit or stand, a dealer that stands on 17, and
//! settlement against the player's money. [`Session`] drives a game over a
//! text console and saves the balance after every round.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use bjterm::{AccountStore, Console, Deck, Game, Session, load_canonical};
//!
//! let cards = load_canonical("deck.json".as_ref()).unwrap();
//! let store = AccountStore::new("user.json");
//! let account = store.load_or_create(1000).unwrap();
//! let game = Game::new(Deck::new(cards, 42).unwrap(), account.money);
//! let console = Console::new(io::stdin().lock(), io::stdout());
//! let final_money = Session::new(game, store, console).run().unwrap();
//! let _ = final_money;
//! ```

pub mod account;
pub mod card;
pub mod cli;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use account::{Account, AccountStore, STARTING_MONEY};
pub use card::Card;
pub use cli::Cli;
pub use deck::{Deck, Shoe, load_canonical};
pub use error::{
    AccountError, ActionError, BetError, CardError, DealError, DeckError, SessionError,
    ShowdownError,
};
pub use game::{DEALER_STANDS_ON, Game, GameState, parse_bet, resolve};
pub use hand::{BLACKJACK, DealerHand, Hand, card_value, hand_value};
pub use options::SessionOptions;
pub use result::{HandOutcome, RoundResult};
pub use session::{Console, Session};
