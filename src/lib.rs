//! A Flip 7 card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round and turn state
//! machine: drawing, busts and Second Chance, Freeze and Flip Three targeting,
//! the 7-unique bonus, banking and the race to 200 points. Presentation is left
//! to the caller, which renders the [`RoundEvent`]s each operation returns.
//!
//! # Example
//!
//! ```
//! use flip7::{Game, RoundEvent};
//!
//! let game = Game::configure(3, 42).unwrap();
//! game.start_round().unwrap();
//!
//! let events = game.hit(0).unwrap();
//! assert!(matches!(events[0], RoundEvent::Drew { player: 0, .. }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;
pub mod scoring;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_NUMBER, TargetAction};
pub use deck::Deck;
pub use error::{ActionError, ConfigError, DeckError, ReshuffleError, RoundError, TargetError};
pub use event::RoundEvent;
pub use game::{Game, GameState, PendingTarget};
pub use hand::Hand;
pub use options::{GameOptions, PLAYER_RANGE, TieBreak};
pub use player::{Draw, FinishReason, PlayerRound, PlayerStatus};
pub use result::{PlayerResult, RoundResult};
pub use scoring::{SEVEN_UNIQUE_BONUS, UNIQUE_TARGET};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
