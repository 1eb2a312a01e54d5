//! Round controller.

use crate::deck::Shoe;
use crate::hand::{BLACKJACK, DealerHand, Hand};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use bet::parse_bet;
pub use dealer::{DEALER_STANDS_ON, resolve};
pub use state::GameState;

/// A single-player blackjack table that runs one round at a time.
///
/// The game owns the shoe, the player's money, and both hands. A round goes
/// through [`start_round`](Self::start_round), [`bet`](Self::bet),
/// [`deal`](Self::deal), any number of [`hit`](Self::hit)s followed by
/// [`stand`](Self::stand), [`dealer_play`](Self::dealer_play) (skipped when
/// the player busts) and finally [`settle`](Self::settle).
///
/// # Example
///
/// ```
/// use bjterm::{Card, Deck, Game, GameState};
///
/// let cards = vec![Card::new(10, '♠'), Card::new(9, '♥'), Card::new(8, '♦'), Card::new(7, '♣')];
/// let mut game = Game::new(Deck::new(cards, 1).unwrap(), 100);
/// game.start_round();
/// game.bet(10).unwrap();
/// game.deal().unwrap();
/// assert_eq!(game.state(), GameState::PlayerTurn);
/// ```
#[derive(Debug, Clone)]
pub struct Game<S> {
    /// Cards are dealt from here.
    shoe: S,
    /// Current round state.
    state: GameState,
    /// Player money.
    money: usize,
    /// Bet for the current round.
    bet: usize,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: DealerHand,
}

impl<S: Shoe> Game<S> {
    /// Creates a game dealing from `shoe` for a player holding `money`.
    #[must_use]
    pub const fn new(shoe: S, money: usize) -> Self {
        Self {
            shoe,
            state: GameState::Settled,
            money,
            bet: 0,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's money.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the bet for the current round, 0 before a bet is placed.
    #[must_use]
    pub const fn bet_amount(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &S {
        &self.shoe
    }

    /// Returns the shoe mutably.
    pub const fn shoe_mut(&mut self) -> &mut S {
        &mut self.shoe
    }

    /// Ends the player's turn once their hand reaches 21 or busts.
    fn finish_player_turn_if_done(&mut self) {
        let value = self.player_hand.value();
        if value > BLACKJACK {
            log::debug!("player busts with {value}");
            self.state = GameState::RoundOver;
        } else if value == BLACKJACK {
            log::debug!("player has 21, dealer's turn");
            self.state = GameState::DealerTurn;
        }
    }
}
