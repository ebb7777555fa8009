//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside `3..=18`.
    #[error("invalid player count {0}: must be between 3 and 18")]
    InvalidPlayerCount(usize),
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every identifier has been drawn.
    #[error("the deck is exhausted")]
    Exhausted,
    /// No undrawn identifier carries the requested face.
    #[error("no undrawn card with that face")]
    CardUnavailable,
}

/// Errors that can occur during a hit or stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress.
    #[error("no round is in progress")]
    InvalidState,
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
    /// An action card is waiting for its target.
    #[error("an action card is waiting for a target")]
    TargetPending,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Player has already stayed, busted or finished this round.
    #[error("player is out of the round")]
    ActionOnTerminalPlayer,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur when resolving an action card target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetError {
    /// No action card is waiting for a target.
    #[error("no action card is waiting for a target")]
    NoPendingTarget,
    /// The pending action is a different card.
    #[error("a different action is waiting for a target")]
    ActionMismatch,
    /// The pending action belongs to another player.
    #[error("the pending action belongs to another player")]
    SourceMismatch,
    /// Target is out of range or already out of the round.
    #[error("invalid target")]
    InvalidTarget,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not ended.
    #[error("a round is already in progress")]
    InProgress,
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
    /// Undrawn cards remain, so drawn cards must stay out of play.
    #[error("the deck still has undrawn cards")]
    DeckNotEmpty,
}
