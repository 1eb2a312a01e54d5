//! Canonical deck loading and the working deck cards are dealt from.

use std::fs;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DeckError;

/// A source of cards for a round.
///
/// [`Deck`] is the real implementation; tests substitute stacked shoes to
/// play out fixed hands.
pub trait Shoe {
    /// Replaces the working cards with a fresh random permutation.
    fn shuffle(&mut self);

    /// Removes and returns the next card, reshuffling first if empty.
    fn deal_one(&mut self) -> Card;
}

/// Loads the canonical deck from a JSON list of card tokens.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON list of
/// strings, contains an invalid token, or is empty.
pub fn load_canonical(path: &Path) -> Result<Vec<Card>, DeckError> {
    let text = fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens: Vec<String> = serde_json::from_str(&text).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<Card>()
                .map_err(|source| DeckError::InvalidCard { index, source })
        })
        .collect::<Result<Vec<Card>, _>>()?;

    if cards.is_empty() {
        return Err(DeckError::Empty);
    }

    log::info!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// The canonical deck plus the shuffled working deck dealt from.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Template cards, never modified after construction.
    canonical: Vec<Card>,
    /// Cards still to be dealt; the next card is at the end.
    working: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck from its canonical cards with the given seed.
    ///
    /// The working deck starts as an unshuffled copy of the canonical deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if `canonical` has no cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Card, Deck, Shoe};
    ///
    /// let mut deck = Deck::new(vec![Card::new(1, '♠'), Card::new(13, '♥')], 42).unwrap();
    /// deck.shuffle();
    /// assert_eq!(deck.remaining(), 2);
    /// ```
    pub fn new(canonical: Vec<Card>, seed: u64) -> Result<Self, DeckError> {
        if canonical.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Self {
            working: canonical.clone(),
            canonical,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the canonical cards.
    #[must_use]
    pub fn canonical(&self) -> &[Card] {
        &self.canonical
    }

    /// Returns the cards left in the working deck, next card last.
    #[must_use]
    pub fn working(&self) -> &[Card] {
        &self.working
    }

    /// Returns the number of cards remaining in the working deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.working.len()
    }
}

impl Shoe for Deck {
    fn shuffle(&mut self) {
        self.working.clone_from(&self.canonical);

        // Fisher–Yates
        for i in (1..self.working.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.working.swap(i, j);
        }

        log::debug!("shuffled {} cards", self.working.len());
    }

    fn deal_one(&mut self) -> Card {
        if self.working.is_empty() {
            log::debug!("working deck exhausted, reshuffling");
            self.shuffle();
        }

        // Never empty here: `new` rejects an empty canonical deck.
        let Some(card) = self.working.pop() else {
            unreachable!("working deck is empty right after a reshuffle")
        };
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(cards: &[Card]) -> Vec<String> {
        let mut tokens: Vec<String> = cards.iter().map(ToString::to_string).collect();
        tokens.sort();
        tokens
    }

    fn standard_deck() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in ['♠', '♥', '♦', '♣'] {
            for rank in 1..=13 {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    #[test]
    fn empty_canonical_deck_is_rejected() {
        assert!(matches!(Deck::new(Vec::new(), 1), Err(DeckError::Empty)));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let canonical = standard_deck();
        let mut deck = Deck::new(canonical.clone(), 7).unwrap();

        for _ in 0..5 {
            deck.shuffle();
            assert_eq!(deck.remaining(), canonical.len());
            assert_eq!(sorted(deck.working()), sorted(&canonical));
        }
        assert_eq!(deck.canonical(), canonical.as_slice());
    }

    #[test]
    fn shuffle_refills_a_partly_dealt_deck() {
        let mut deck = Deck::new(standard_deck(), 3).unwrap();
        deck.shuffle();
        for _ in 0..10 {
            deck.deal_one();
        }
        assert_eq!(deck.remaining(), 42);

        deck.shuffle();
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::new(standard_deck(), 99).unwrap();
        let mut b = Deck::new(standard_deck(), 99).unwrap();
        a.shuffle();
        b.shuffle();
        assert_eq!(a.working(), b.working());
    }

    #[test]
    fn deal_takes_from_the_end() {
        let canonical = vec![Card::new(2, 'S'), Card::new(3, 'S'), Card::new(4, 'S')];
        let mut deck = Deck::new(canonical, 1).unwrap();
        assert_eq!(deck.deal_one(), Card::new(4, 'S'));
        assert_eq!(deck.deal_one(), Card::new(3, 'S'));
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn dealing_from_empty_deck_reshuffles_once() {
        let canonical = standard_deck();
        let mut deck = Deck::new(canonical.clone(), 5).unwrap();
        for _ in 0..canonical.len() {
            deck.deal_one();
        }
        assert_eq!(deck.remaining(), 0);

        let card = deck.deal_one();
        assert!(canonical.contains(&card));
        assert_eq!(deck.remaining(), canonical.len() - 1);

        let mut rest = deck.working().to_vec();
        rest.push(card);
        assert_eq!(sorted(&rest), sorted(&canonical));
    }

    #[test]
    fn single_card_deck_never_runs_dry() {
        let mut deck = Deck::new(vec![Card::new(1, 'H')], 2).unwrap();
        for _ in 0..5 {
            assert_eq!(deck.deal_one(), Card::new(1, 'H'));
        }
    }
}
