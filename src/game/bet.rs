use crate::deck::Shoe;
use crate::error::{BetError, DealError};

use super::{Game, GameState};

/// Parses and validates a bet typed by the player.
///
/// A valid bet is a whole number greater than zero and no larger than
/// `money`.
///
/// # Errors
///
/// Returns an error if the input is not a number, is zero or negative, or
/// exceeds `money`.
///
/// # Example
///
/// ```
/// use bjterm::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(" 100 ", 1000), Ok(100));
/// assert_eq!(parse_bet("1000", 1000), Ok(1000));
/// assert_eq!(parse_bet("0", 1000), Err(BetError::ZeroBet));
/// assert_eq!(parse_bet("-5", 1000), Err(BetError::NegativeBet));
/// assert_eq!(parse_bet("1001", 1000), Err(BetError::InsufficientFunds));
/// assert_eq!(parse_bet("ten", 1000), Err(BetError::NotANumber));
/// ```
pub fn parse_bet(input: &str, money: usize) -> Result<usize, BetError> {
    let amount: i64 = input.trim().parse().map_err(|_| BetError::NotANumber)?;
    if amount < 0 {
        return Err(BetError::NegativeBet);
    }
    let amount = usize::try_from(amount).map_err(|_| BetError::InsufficientFunds)?;
    validate_bet(amount, money)
}

const fn validate_bet(amount: usize, money: usize) -> Result<usize, BetError> {
    if amount == 0 {
        return Err(BetError::ZeroBet);
    }
    if amount > money {
        return Err(BetError::InsufficientFunds);
    }
    Ok(amount)
}

impl<S: Shoe> Game<S> {
    /// Opens a new round: clears both hands and shuffles the shoe.
    ///
    /// Calling this while a round is in progress abandons that round without
    /// settling it.
    pub fn start_round(&mut self) {
        if self.state != GameState::Settled && self.state != GameState::Start {
            log::warn!("abandoning round in state {:?}", self.state);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.bet = 0;
        self.shoe.shuffle();
        self.state = GameState::Start;
    }

    /// Places the bet for the round.
    ///
    /// The bet stays on the table until [`settle`](Self::settle); the
    /// player's money is not touched here.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been started, the bet is zero, or the
    /// player lacks funds.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Start {
            return Err(BetError::InvalidState);
        }

        self.bet = validate_bet(amount, self.money)?;
        self.state = GameState::BetPlaced;
        log::debug!("bet {amount} of {}", self.money);

        Ok(())
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// The dealer's second card is the hole card. A player dealt 21 skips
    /// straight to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::BetPlaced {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.shoe.deal_one();
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.shoe.deal_one();
            self.dealer_hand.add_card(card);
        }

        self.state = GameState::PlayerTurn;
        self.finish_player_turn_if_done();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_bounds() {
        assert_eq!(parse_bet("1", 1), Ok(1));
        assert_eq!(parse_bet("0", 1), Err(BetError::ZeroBet));
        assert_eq!(parse_bet("-1", 1), Err(BetError::NegativeBet));
        assert_eq!(parse_bet("2", 1), Err(BetError::InsufficientFunds));
    }

    #[test]
    fn non_numeric_bets_are_rejected() {
        for input in ["", "   ", "abc", "12abc", "1.5", "$10"] {
            assert_eq!(parse_bet(input, 1000), Err(BetError::NotANumber), "{input:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_bet("  250\n", 1000), Ok(250));
    }
}
