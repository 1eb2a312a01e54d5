//! Card tokens.
//!
//! A token is a rank (`2`..=`10`, `J`, `Q`, `K`, `A`) followed by a single
//! suit marker, e.g. `"10♠"` or `"AH"`. Only the rank matters for scoring;
//! the suit marker is kept so the card prints back exactly as configured.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Rank of an ace.
pub const ACE: u8 = 1;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit marker, printed after the rank.
    pub suit: char,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero when evaluating a hand.
    #[must_use]
    pub const fn new(rank: u8, suit: char) -> Self {
        Self { rank, suit }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }
}

fn parse_rank(rank: &str) -> Option<u8> {
    match rank {
        "A" => Some(ACE),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" | "10" => rank.parse().ok(),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a token such as `"Q♥"`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::Card;
    ///
    /// let card: Card = "10♠".parse().unwrap();
    /// assert_eq!(card, Card::new(10, '♠'));
    /// assert_eq!(card.to_string(), "10♠");
    /// ```
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let suit = chars.next_back().ok_or(CardError::Empty)?;
        let rank = chars.as_str();
        let rank = parse_rank(rank).ok_or_else(|| CardError::UnknownRank(token.to_owned()))?;
        Ok(Self::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}
