//! Read-only views of the game for rendering.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameState, PendingTarget};
use crate::player::PlayerStatus;

/// A player's visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Cards held this round.
    pub hand: Vec<Card>,
    /// Round status.
    pub status: PlayerStatus,
    /// Whether the next visit will be skipped.
    pub frozen: bool,
    /// Score the player would bank now.
    pub round_score: u32,
    /// Cumulative banked score.
    pub total_score: u32,
}

/// A copy of everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current game state.
    pub state: GameState,
    /// Current round number (0 before the first round).
    pub round: u32,
    /// The player whose turn it is, while a round is running.
    pub current_player: Option<usize>,
    /// The action waiting for a target, if any.
    pub pending: Option<PendingTarget>,
    /// Players in seat order.
    pub players: Vec<PlayerSnapshot>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
