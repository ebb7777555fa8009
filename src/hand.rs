//! A player's hand for the current round.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::scoring;

/// The cards a player has drawn this round, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
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

    /// Calculates the round score of the hand, including the 7-unique bonus.
    #[must_use]
    pub fn score(&self) -> u32 {
        scoring::score(&self.cards)
    }

    /// Returns whether some number value appears more than once.
    #[must_use]
    pub fn has_duplicate_number(&self) -> bool {
        scoring::has_duplicate_number(&self.cards)
    }

    /// Counts the distinct number values in the hand.
    #[must_use]
    pub fn unique_number_count(&self) -> usize {
        scoring::unique_number_count(&self.cards)
    }

    /// Counts the copies of number `value` in the hand.
    #[must_use]
    pub fn count_number(&self, value: u8) -> usize {
        self.cards
            .iter()
            .filter(|&&card| card == Card::Number(value))
            .count()
    }

    /// Returns whether the hand holds a Second Chance.
    #[must_use]
    pub fn has_second_chance(&self) -> bool {
        self.cards.contains(&Card::SecondChance)
    }

    /// Discards one Second Chance together with the most recent copy of
    /// number `value`.
    ///
    /// Returns `false` and leaves the hand untouched unless both cards are
    /// present.
    pub fn spend_second_chance(&mut self, value: u8) -> bool {
        let Some(chance) = self.cards.iter().position(|&c| c == Card::SecondChance) else {
            return false;
        };
        let Some(duplicate) = self.cards.iter().rposition(|&c| c == Card::Number(value)) else {
            return false;
        };

        // Remove the later index first so the earlier one stays valid.
        let (first, second) = if chance < duplicate {
            (chance, duplicate)
        } else {
            (duplicate, chance)
        };
        self.cards.remove(second);
        self.cards.remove(first);
        true
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

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
