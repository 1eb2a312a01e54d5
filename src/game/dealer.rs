use core::cmp::Ordering;

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::ShowdownError;
use crate::hand::BLACKJACK;
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState};

/// The dealer stops drawing at this value or higher.
pub const DEALER_STANDS_ON: u8 = 17;

/// Decides the outcome of a round from the final hand values.
///
/// A busted player loses regardless of the dealer's hand.
///
/// # Example
///
/// ```
/// use bjterm::{HandOutcome, resolve};
///
/// assert_eq!(resolve(20, 19), HandOutcome::Win);
/// assert_eq!(resolve(18, 18), HandOutcome::Push);
/// assert_eq!(resolve(17, 22), HandOutcome::Win);
/// assert_eq!(resolve(22, 22), HandOutcome::Lose);
/// ```
#[must_use]
pub fn resolve(player_value: u8, dealer_value: u8) -> HandOutcome {
    if player_value > BLACKJACK {
        return HandOutcome::Lose;
    }
    if dealer_value > BLACKJACK {
        return HandOutcome::Win;
    }

    match player_value.cmp(&dealer_value) {
        Ordering::Greater => HandOutcome::Win,
        Ordering::Less => HandOutcome::Lose,
        Ordering::Equal => HandOutcome::Push,
    }
}

impl<S: Shoe> Game<S> {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws while their hand is
    /// below 17. A soft 17 stands like any other 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.shoe.deal_one();
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer drew {} card(s), stands on {}",
            drawn_cards.len(),
            self.dealer_hand.value()
        );
        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Settles the bet against the player's money and reshuffles the shoe.
    ///
    /// A win adds the bet to the player's money, a loss (including a bust)
    /// subtracts it, and a push leaves it unchanged. The bet was checked
    /// against the player's money when it was placed and is not checked
    /// again here.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state, or if a win
    /// would push the player's money past `usize::MAX`. The round is left
    /// unsettled in that case.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let player_bust = self.player_hand.is_bust();
        let dealer_value = self.dealer_hand.value();
        let outcome = resolve(player_value, dealer_value);

        let bet = self.bet;
        let stake = isize::try_from(bet).map_err(|_| ShowdownError::BalanceOverflow)?;
        let (money, net) = match outcome {
            HandOutcome::Win => {
                let money = self
                    .money
                    .checked_add(bet)
                    .ok_or(ShowdownError::BalanceOverflow)?;
                (money, stake)
            }
            HandOutcome::Lose => (self.money - bet, -stake),
            HandOutcome::Push => (self.money, 0),
        };
        self.money = money;

        log::debug!("round settled: {outcome}, net {net}, money {}", self.money);

        self.shoe.shuffle();
        self.state = GameState::Settled;

        Ok(RoundResult {
            outcome,
            player_bust,
            bet,
            player_value,
            dealer_value: (!player_bust).then_some(dealer_value),
            dealer_bust: !player_bust && self.dealer_hand.is_bust(),
            net,
            money: self.money,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_table() {
        assert_eq!(resolve(20, 19), HandOutcome::Win);
        assert_eq!(resolve(19, 20), HandOutcome::Lose);
        assert_eq!(resolve(18, 18), HandOutcome::Push);
        assert_eq!(resolve(21, 21), HandOutcome::Push);
        assert_eq!(resolve(12, 22), HandOutcome::Win);
    }

    #[test]
    fn bust_loses_against_any_dealer_hand() {
        for dealer in [2, 17, 20, 21, 22, 26] {
            assert_eq!(resolve(22, dealer), HandOutcome::Lose);
        }
    }
}
