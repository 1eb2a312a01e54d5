//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress (initial state, and after settlement).
    Settled,
    /// Deck shuffled for a new round, waiting for a bet.
    Start,
    /// Bet accepted, waiting for the deal.
    BetPlaced,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Outcome is decided and the bet can be settled.
    RoundOver,
}
