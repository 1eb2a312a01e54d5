use crate::card::Card;
use crate::deck::Shoe;
use crate::error::ActionError;

use super::{Game, GameState};

impl<S: Shoe> Game<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 moves on to the dealer's turn; going over 21 ends the
    /// round as a bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.deal_one();
        self.player_hand.add_card(card);
        self.finish_player_turn_if_done();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = GameState::DealerTurn;

        Ok(())
    }
}
