//! The player's hand: drawn card values in draw order.

extern crate alloc;

use alloc::vec::Vec;

/// Total at which a hand wins.
pub const BLACKJACK: u8 = 21;

fn sum_cards(cards: &[u8]) -> u8 {
    cards.iter().fold(0u8, |total, &value| total.saturating_add(value))
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Total is below 21; the hand can take another card.
    Active,
    /// Total is exactly 21.
    Blackjack,
    /// Total is over 21.
    Bust,
}

impl HandStatus {
    /// Classifies a running total.
    #[must_use]
    pub const fn from_total(total: u8) -> Self {
        if total > BLACKJACK {
            Self::Bust
        } else if total == BLACKJACK {
            Self::Blackjack
        } else {
            Self::Active
        }
    }
}

/// A hand of card values.
///
/// The total is always derived from the cards, so it cannot drift from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<u8>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card value to the hand.
    pub fn add_card(&mut self, value: u8) {
        self.cards.push(value);
    }

    /// Returns the card values in draw order.
    #[must_use]
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub fn total(&self) -> u8 {
        sum_cards(&self.cards)
    }

    /// Returns the status implied by the current total.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        HandStatus::from_total(self.total())
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

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
