//! Round scoring.
//!
//! Number cards and additive modifiers are summed, the sum is doubled once per
//! multiplier, and a hand holding exactly seven distinct numbers earns a flat
//! bonus on top. Action cards score nothing.

use crate::card::Card;

/// Distinct numbers needed for the bonus.
pub const UNIQUE_TARGET: usize = 7;

/// Flat bonus for holding [`UNIQUE_TARGET`] distinct numbers.
pub const SEVEN_UNIQUE_BONUS: u32 = 15;

/// Marks which number values are present in `cards`.
fn numbers_seen(cards: &[Card]) -> [bool; 256] {
    let mut seen = [false; 256];
    for value in cards.iter().filter_map(|card| card.number()) {
        seen[usize::from(value)] = true;
    }
    seen
}

/// Computes the round score of a set of cards.
#[must_use]
pub fn score(cards: &[Card]) -> u32 {
    let mut total: u32 = 0;
    let mut doublings: u32 = 0;

    for card in cards {
        match *card {
            Card::Number(value) | Card::Additive(value) => total += u32::from(value),
            Card::Multiplier => doublings += 1,
            Card::Freeze | Card::FlipThree | Card::SecondChance => {}
        }
    }

    for _ in 0..doublings {
        total = total.saturating_mul(2);
    }

    if unique_number_count(cards) == UNIQUE_TARGET {
        total = total.saturating_add(SEVEN_UNIQUE_BONUS);
    }

    total
}

/// Returns whether any number value appears more than once.
#[must_use]
pub fn has_duplicate_number(cards: &[Card]) -> bool {
    let numbers = cards.iter().filter(|card| card.number().is_some()).count();
    numbers != unique_number_count(cards)
}

/// Counts the distinct number values.
#[must_use]
pub fn unique_number_count(cards: &[Card]) -> usize {
    numbers_seen(cards).iter().filter(|&&seen| seen).count()
}
