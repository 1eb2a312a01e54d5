//! Interactive session: prompts, round flow, and persistence.

use std::io::{self, BufRead, Write};

use crate::account::{Account, AccountStore};
use crate::card::Card;
use crate::deck::Shoe;
use crate::error::SessionError;
use crate::game::{Game, GameState, parse_bet};
use crate::result::{HandOutcome, RoundResult};

/// Line-oriented prompts over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and blocks until a line is read.
    ///
    /// Returns the trimmed line, or `None` once the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Prints a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

const fn outcome_line(result: &RoundResult) -> &'static str {
    if result.player_bust {
        return "BUST!";
    }
    match result.outcome {
        HandOutcome::Win => "WIN",
        HandOutcome::Lose => "LOSE!",
        HandOutcome::Push => "PUSH!",
    }
}

/// A player's session at the table: plays rounds until they quit or run out
/// of money, saving the balance after every round.
#[derive(Debug)]
pub struct Session<S, R, W> {
    game: Game<S>,
    store: AccountStore,
    console: Console<R, W>,
}

impl<S: Shoe, R: BufRead, W: Write> Session<S, R, W> {
    /// Creates a session.
    #[must_use]
    pub const fn new(game: Game<S>, store: AccountStore, console: Console<R, W>) -> Self {
        Self {
            game,
            store,
            console,
        }
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Asks for a bet until a valid one is entered.
    ///
    /// Returns `None` if the input is closed first.
    fn ask_bet(&mut self) -> Result<Option<usize>, SessionError> {
        let money = self.game.money();
        loop {
            let prompt = format!("Enter your bet (Available: ${money}): ");
            let Some(input) = self.console.ask(&prompt)? else {
                return Ok(None);
            };
            match parse_bet(&input, money) {
                Ok(bet) => return Ok(Some(bet)),
                Err(err) => {
                    log::debug!("rejected bet {input:?}: {err}");
                    self.console.say(&format!("Invalid bet: {err}. Try again."))?;
                }
            }
        }
    }

    /// Asks hit or stand; anything but `h`/`hit` (or closed input) stands.
    fn ask_hit(&mut self) -> Result<bool, SessionError> {
        let answer = self.console.ask("Hit or stand? (h/s): ")?;
        Ok(answer.is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "h" | "hit")))
    }

    fn ask_play_again(&mut self) -> Result<bool, SessionError> {
        let answer = self.console.ask("Play another round? (y/n): ")?;
        Ok(answer.is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }

    fn show_player_hand(&mut self) -> Result<(), SessionError> {
        let hand = self.game.player_hand();
        let line = format!(
            "Your hand: {} (Value: {})",
            format_cards(hand.cards()),
            hand.value()
        );
        self.console.say(&line)?;
        Ok(())
    }

    /// Shows only the up card until the hole card is revealed.
    fn show_dealer_hand(&mut self) -> Result<(), SessionError> {
        let dealer = self.game.dealer_hand();
        let line = if dealer.is_hole_revealed() {
            format!(
                "Dealer's hand: {} (Value: {})",
                format_cards(dealer.cards()),
                dealer.visible_value()
            )
        } else {
            match dealer.up_card() {
                Some(up_card) => format!("Dealer shows: {up_card}"),
                None => return Ok(()),
            }
        };
        self.console.say(&line)?;
        Ok(())
    }

    /// Plays one round and saves the new balance.
    ///
    /// Returns `None` if the input closed before a bet was placed; the
    /// balance is then left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the balance cannot be saved.
    pub fn play_round(&mut self) -> Result<Option<RoundResult>, SessionError> {
        self.game.start_round();

        let Some(bet) = self.ask_bet()? else {
            return Ok(None);
        };
        self.game.bet(bet)?;
        self.game.deal()?;

        self.show_player_hand()?;
        self.show_dealer_hand()?;

        while self.game.state() == GameState::PlayerTurn {
            if self.ask_hit()? {
                self.game.hit()?;
                self.show_player_hand()?;
            } else {
                self.game.stand()?;
            }
        }

        if self.game.state() == GameState::DealerTurn {
            self.game.dealer_play()?;
            self.show_dealer_hand()?;
        }

        let result = self.game.settle()?;
        self.console.say(outcome_line(&result))?;
        self.console.say(&format!("Balance: ${}", result.money))?;

        self.store.save(&Account::new(result.money))?;

        Ok(Some(result))
    }

    /// Plays rounds until the player declines another, runs out of money,
    /// or closes the input.
    ///
    /// Returns the final balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the balance cannot be saved.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        while self.game.money() > 0 {
            if self.play_round()?.is_none() {
                break;
            }
            if self.game.money() == 0 {
                self.console.say("You are out of money.")?;
                break;
            }
            if !self.ask_play_again()? {
                break;
            }
        }

        let money = self.game.money();
        self.console
            .say(&format!("Game over. You finished with ${money}"))?;
        Ok(money)
    }
}
