//! Player and dealer hand representations.

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// Returns the point value of a rank.
///
/// Numerals score their face value, J/Q/K score 10 and an ace scores 11.
/// The ace is brought down to 1 by [`hand_value`] when needed.
#[must_use]
pub const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the value of a list of cards.
///
/// Aces count as 11 unless that would bust the hand, in which case they are
/// downgraded to 1 one at a time. The order of the cards does not matter.
///
/// # Example
///
/// ```
/// use bjterm::{Card, hand_value};
///
/// let cards: Vec<Card> = ["A♠", "A♥", "9♦"]
///     .iter()
///     .map(|token| token.parse().unwrap())
///     .collect();
/// assert_eq!(hand_value(&cards), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |c| card_value(c.rank))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|token| token.parse().unwrap()).collect()
    }

    #[test]
    fn card_values_follow_rank() {
        assert_eq!(card_value(1), 11);
        assert_eq!(card_value(7), 7);
        assert_eq!(card_value(10), 10);
        assert_eq!(card_value(11), 10);
        assert_eq!(card_value(13), 10);
    }

    #[test]
    fn ace_stays_high_when_it_fits() {
        assert_eq!(hand_value(&cards(&["10♠", "A♥"])), 21);
    }

    #[test]
    fn one_ace_is_downgraded() {
        assert_eq!(hand_value(&cards(&["A♠", "A♥", "9♦"])), 21);
    }

    #[test]
    fn every_ace_can_be_downgraded() {
        assert_eq!(hand_value(&cards(&["A♠", "A♥", "A♦", "A♣", "K♠"])), 14);
    }

    #[test]
    fn face_cards_bust_without_aces() {
        assert_eq!(hand_value(&cards(&["K♠", "Q♥", "2♦"])), 22);
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(hand_value(&[]), 0);
    }

    #[test]
    fn value_ignores_card_order() {
        let hands = [
            cards(&["A♠", "A♥", "9♦"]),
            cards(&["5♣", "A♦", "K♥", "A♠"]),
            cards(&["2♠", "3♥", "A♣", "7♦", "J♠"]),
        ];
        for hand in hands {
            let expected = hand_value(&hand);
            let n = hand.len();
            for shift in 0..n {
                let mut rotated = hand.clone();
                rotated.rotate_left(shift);
                assert_eq!(hand_value(&rotated), expected);
                rotated.reverse();
                assert_eq!(hand_value(&rotated), expected);
            }
        }
    }

    #[test]
    fn soft_and_hard_hands() {
        let mut hand = Hand::new();
        hand.add_card("A♠".parse().unwrap());
        hand.add_card("6♥".parse().unwrap());
        assert_eq!(hand.value(), 17);
        assert!(hand.is_soft());

        hand.add_card("9♦".parse().unwrap());
        assert_eq!(hand.value(), 16);
        assert!(!hand.is_soft());
        assert!(!hand.is_bust());
    }
}
