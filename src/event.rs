//! Events reported by engine operations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, TargetAction};
use crate::result::RoundResult;

/// Something that happened while the engine processed a call.
///
/// Each operation returns its events in order. The last event says what the
/// caller should do next: pick a target ([`RoundEvent::NeedsTarget`]), let the
/// next player act ([`RoundEvent::TurnAdvanced`]), or start another round
/// ([`RoundEvent::RoundEnded`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A card was drawn into a player's hand.
    Drew {
        /// The player who received the card.
        player: usize,
        /// The card.
        card: Card,
    },
    /// A Second Chance cancelled a duplicate number.
    SecondChanceUsed {
        /// The player.
        player: usize,
        /// The duplicated number.
        value: u8,
    },
    /// The player drew an uncancelled duplicate.
    Busted {
        /// The player.
        player: usize,
    },
    /// The player collected seven distinct numbers.
    SevenUnique {
        /// The player.
        player: usize,
        /// Round score including the bonus.
        score: u32,
    },
    /// The player stopped drawing.
    Stayed {
        /// The player.
        player: usize,
        /// Round score fixed at this moment.
        score: u32,
    },
    /// A frozen player's visit was used up.
    FreezeConsumed {
        /// The player.
        player: usize,
    },
    /// An action card is waiting for [`crate::Game::resolve_target`].
    NeedsTarget {
        /// The action to resolve.
        action: TargetAction,
        /// The player choosing the target.
        source: usize,
        /// Players that may be targeted.
        valid_targets: Vec<usize>,
    },
    /// A Freeze landed.
    Frozen {
        /// The player who played the card.
        source: usize,
        /// The player who will lose a visit.
        target: usize,
    },
    /// A Flip Three sequence began.
    FlipThreeStarted {
        /// The player who played the card.
        source: usize,
        /// The player drawing three cards.
        target: usize,
    },
    /// The deck ran out before a Flip Three finished.
    DeckExhausted {
        /// The player who was drawing.
        player: usize,
    },
    /// Play moved to another player.
    TurnAdvanced {
        /// The player whose turn it is.
        next_player: usize,
    },
    /// Every player is out and scores were banked.
    RoundEnded(RoundResult),
}
