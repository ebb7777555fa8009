//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::deck::Deck;
use crate::error::{ConfigError, ReshuffleError};
use crate::hand::Hand;
use crate::options::{GameOptions, PLAYER_RANGE};
use crate::player::{PlayerRound, PlayerStatus};
use crate::snapshot::{GameSnapshot, PlayerSnapshot};

mod actions;
mod round;
pub mod state;
mod target;

pub use state::{GameState, PendingTarget};

/// A Flip 7 game engine that manages rounds, turns and cumulative scores.
///
/// The game owns the deck, every player's round state and the banked scores.
/// All operations take `&self` and serialize through internal locks, so one
/// call runs to completion before the next is observed.
#[derive(Debug)]
pub struct Game {
    /// The draw pile.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Per-round player state, in seat order.
    pub players: Mutex<Vec<PlayerRound>>,
    /// Cumulative banked scores, in seat order.
    pub scores: Mutex<Vec<u32>>,
    /// Current round number (0 before the first round).
    round: AtomicU32,
    /// Index of the player whose turn it is.
    current_turn: Mutex<usize>,
    /// Action cards waiting for a target, oldest first.
    pending: Mutex<VecDeque<PendingTarget>>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlayerCount`] unless `options.players`
    /// is between 3 and 18.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_players(4), 42).unwrap();
    /// assert_eq!(game.player_count(), 4);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        if !PLAYER_RANGE.contains(&options.players) {
            return Err(ConfigError::InvalidPlayerCount(options.players));
        }

        let count = options.players;
        Ok(Self {
            deck: Mutex::new(Deck::new(seed)),
            options,
            state: Mutex::new(GameState::WaitingForRound),
            players: Mutex::new(alloc::vec![PlayerRound::new(); count]),
            scores: Mutex::new(alloc::vec![0; count]),
            round: AtomicU32::new(0),
            current_turn: Mutex::new(0),
            pending: Mutex::new(VecDeque::new()),
        })
    }

    /// Creates a game for `player_count` players with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlayerCount`] outside `3..=18`.
    pub fn configure(player_count: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::new(GameOptions::default().with_players(player_count), seed)
    }

    /// Returns every card to an exhausted deck.
    ///
    /// Drawn cards stay out of play for the rest of the game, so this only
    /// succeeds between rounds once every card has been drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ReshuffleError::InvalidState`] while a round is in progress
    /// and [`ReshuffleError::DeckNotEmpty`] while undrawn cards remain.
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        let state = *self.state.lock();
        if state != GameState::WaitingForRound && state != GameState::RoundOver {
            return Err(ReshuffleError::InvalidState);
        }

        let mut deck = self.deck.lock();
        if deck.remaining() > 0 {
            return Err(ReshuffleError::DeckNotEmpty);
        }
        deck.reset();
        drop(deck);
        tracing::debug!("exhausted deck reshuffled");

        Ok(())
    }

    /// Discards all scores, hands and drawn cards, keeping the player count.
    ///
    /// The deck keeps its random stream, so the new game deals differently.
    pub fn restart(&self) {
        let count = self.player_count();

        self.deck.lock().reset();
        *self.players.lock() = alloc::vec![PlayerRound::new(); count];
        *self.scores.lock() = alloc::vec![0; count];
        self.pending.lock().clear();
        *self.current_turn.lock() = 0;
        self.round.store(0, Ordering::SeqCst);
        *self.state.lock() = GameState::WaitingForRound;

        tracing::info!(players = count, "game restarted");
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current round number (0 before the first round).
    pub fn round_number(&self) -> u32 {
        self.round.load(Ordering::SeqCst)
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` when no round is running.
    pub fn current_player(&self) -> Option<usize> {
        match *self.state.lock() {
            GameState::PlayerTurn | GameState::AwaitingTarget => Some(*self.current_turn.lock()),
            _ => None,
        }
    }

    /// Returns the action waiting for a target, if any.
    pub fn pending_target(&self) -> Option<PendingTarget> {
        self.pending.lock().front().copied()
    }

    /// Returns a copy of the player's hand.
    pub fn get_hand(&self, player: usize) -> Option<Hand> {
        self.players.lock().get(player).map(|p| p.hand().clone())
    }

    /// Returns the player's round status.
    pub fn get_status(&self, player: usize) -> Option<PlayerStatus> {
        self.players.lock().get(player).map(PlayerRound::status)
    }

    /// Returns whether the player will lose their next visit.
    pub fn is_frozen(&self, player: usize) -> Option<bool> {
        self.players.lock().get(player).map(PlayerRound::is_frozen)
    }

    /// Returns the score the player would bank if the round ended now.
    pub fn get_round_score(&self, player: usize) -> Option<u32> {
        self.players.lock().get(player).map(PlayerRound::round_score)
    }

    /// Returns the player's cumulative score.
    pub fn get_score(&self, player: usize) -> Option<u32> {
        self.scores.lock().get(player).copied()
    }

    /// Returns every player's cumulative score.
    pub fn scores(&self) -> Vec<u32> {
        self.scores.lock().clone()
    }

    /// Returns a read-only view of the whole table.
    #[doc(alias = "current_state")]
    pub fn snapshot(&self) -> GameSnapshot {
        let state = self.state();
        let current_player = self.current_player();
        let pending = self.pending_target();
        let cards_remaining = self.cards_remaining();
        let scores = self.scores();

        let players = self
            .players
            .lock()
            .iter()
            .zip(scores)
            .map(|(player, total_score)| PlayerSnapshot {
                hand: player.hand().cards().to_vec(),
                status: player.status(),
                frozen: player.is_frozen(),
                round_score: player.round_score(),
                total_score,
            })
            .collect();

        GameSnapshot {
            state,
            round: self.round_number(),
            current_player,
            pending,
            players,
            cards_remaining,
        }
    }
}
