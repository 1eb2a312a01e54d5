//! Round result types for settlement.

use core::fmt;

/// Result of the player's hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Push => "PUSH",
        })
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the player's hand.
    pub outcome: HandOutcome,
    /// Whether the player busted (the dealer did not play).
    pub player_bust: bool,
    /// The bet amount.
    pub bet: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value, `None` when the dealer turn was skipped.
    pub dealer_value: Option<u8>,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's money after settlement.
    pub money: usize,
}
