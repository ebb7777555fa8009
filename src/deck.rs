//! The draw pile.
//!
//! A [`Deck`] hands out each identifier at most once until it is reset, so a
//! card that has been drawn stays out of play for the rest of the game.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;

/// Draw pile over the identifier space `1..=94`.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Identifiers that have not been drawn or reserved.
    remaining: Vec<u8>,
    /// Identifiers reserved by [`Deck::stack`], drawn front first.
    stacked: VecDeque<u8>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a full deck whose draws are seeded by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a full deck drawing with the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            remaining: all_ids(),
            stacked: VecDeque::new(),
            rng,
        }
    }

    /// Draws a uniformly random identifier that has not been drawn yet.
    ///
    /// Stacked cards are drawn first, in the order they were stacked.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once every identifier has been drawn.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let id = if let Some(id) = self.stacked.pop_front() {
            id
        } else {
            if self.remaining.is_empty() {
                return Err(DeckError::Exhausted);
            }
            let index = self.rng.random_range(0..self.remaining.len());
            self.remaining.swap_remove(index)
        };

        Card::from_id(id).ok_or(DeckError::Exhausted)
    }

    /// Forces the next draws to produce `cards`, in order.
    ///
    /// Each card reserves an undrawn identifier with that face, so stacking
    /// never brings back a card that was already drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardUnavailable`] if some face has no undrawn
    /// identifier left. Nothing is reserved in that case.
    pub fn stack(&mut self, cards: &[Card]) -> Result<(), DeckError> {
        let mut reserved = Vec::with_capacity(cards.len());

        for &card in cards {
            let position = self
                .remaining
                .iter()
                .position(|&id| Card::from_id(id) == Some(card));

            if let Some(position) = position {
                reserved.push(self.remaining.swap_remove(position));
            } else {
                self.remaining.extend(reserved);
                return Err(DeckError::CardUnavailable);
            }
        }

        self.stacked.extend(reserved);
        Ok(())
    }

    /// Returns the number of identifiers that can still be drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len() + self.stacked.len()
    }

    /// Returns the number of identifiers drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        DECK_SIZE - self.remaining()
    }

    /// Returns every identifier to the pile and drops any stacked cards.
    pub fn reset(&mut self) {
        self.remaining = all_ids();
        self.stacked.clear();
    }
}

fn all_ids() -> Vec<u8> {
    (1..=DECK_SIZE as u8).collect()
}
