//! Game state types.

use crate::card::TargetAction;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the first round to start.
    WaitingForRound,
    /// Waiting for the current player to hit or stay.
    PlayerTurn,
    /// An action card is waiting for its target.
    AwaitingTarget,
    /// Round has ended and scores are banked.
    RoundOver,
    /// A player reached the winning score.
    GameOver,
}

/// An action card waiting for its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTarget {
    /// The action to resolve.
    pub action: TargetAction,
    /// The player who chooses the target.
    pub source: usize,
}
