//! Round banking results.

extern crate alloc;

use alloc::vec::Vec;

use crate::player::PlayerStatus;

/// What a single player banked when the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player index.
    pub player: usize,
    /// The player's final status for the round.
    pub status: PlayerStatus,
    /// Points banked this round (0 if busted).
    pub round_score: u32,
    /// Cumulative score after banking.
    pub total_score: u32,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number.
    pub round: u32,
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// Whether some player reached the winning score.
    pub game_over: bool,
    /// The winner, if the game is over and the tie-break names one.
    pub winner: Option<usize>,
}
