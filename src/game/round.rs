use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use crate::error::RoundError;
use crate::event::RoundEvent;
use crate::options::TieBreak;
use crate::player::PlayerStatus;
use crate::result::{PlayerResult, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Starts the next round.
    ///
    /// Clears every hand, makes every player active and gives the first turn
    /// to player 0. Returns the new round number (the first round is 1).
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still running or the game is over.
    pub fn start_round(&self) -> Result<u32, RoundError> {
        let mut state = self.state.lock();
        match *state {
            GameState::WaitingForRound | GameState::RoundOver => {}
            GameState::GameOver => return Err(RoundError::GameOver),
            GameState::PlayerTurn | GameState::AwaitingTarget => {
                return Err(RoundError::InProgress);
            }
        }

        for player in self.players.lock().iter_mut() {
            player.clear();
        }
        self.pending.lock().clear();
        *self.current_turn.lock() = 0;
        let round = self.round.fetch_add(1, Ordering::SeqCst) + 1;
        *state = GameState::PlayerTurn;
        drop(state);

        tracing::info!(round, "round started");
        Ok(round)
    }

    /// Moves the turn to the next player still in the round.
    ///
    /// The search starts after the current player and wraps around, ending on
    /// the current player. If every player is out, the round is banked.
    pub(super) fn advance_turn(&self, events: &mut Vec<RoundEvent>) {
        let players = self.players.lock();
        let mut turn = self.current_turn.lock();
        let count = players.len();

        let next = (1..=count)
            .map(|offset| (*turn + offset) % count)
            .find(|&index| !players[index].status().is_terminal());

        if let Some(next_player) = next {
            *turn = next_player;
            events.push(RoundEvent::TurnAdvanced { next_player });
            return;
        }

        drop(turn);
        drop(players);
        let result = self.end_round_and_bank();
        events.push(RoundEvent::RoundEnded(result));
    }

    /// Banks every player's round score and checks for a winner.
    fn end_round_and_bank(&self) -> RoundResult {
        let players = self.players.lock();
        let mut scores = self.scores.lock();

        let results: Vec<PlayerResult> = players
            .iter()
            .zip(scores.iter_mut())
            .enumerate()
            .map(|(player, (entry, total))| {
                let round_score = entry.round_score();
                *total = total.saturating_add(round_score);
                PlayerResult {
                    player,
                    status: entry.status(),
                    round_score,
                    total_score: *total,
                }
            })
            .collect();

        drop(scores);
        drop(players);

        let game_over = !self.winners().is_empty();
        let winner = self.check_winner();
        *self.state.lock() = if game_over {
            GameState::GameOver
        } else {
            GameState::RoundOver
        };

        let round = self.round_number();
        tracing::info!(round, "round ended, scores banked");
        if game_over {
            tracing::info!(?winner, "game over");
        }

        RoundResult {
            round,
            players: results,
            game_over,
            winner,
        }
    }

    /// Ends the round for every player still drawing, as if they had stayed.
    pub(super) fn close_round(&self, events: &mut Vec<RoundEvent>) {
        let mut players = self.players.lock();
        for (player, round) in players.iter_mut().enumerate() {
            if round.status() == PlayerStatus::Active {
                let score = round.stay();
                events.push(RoundEvent::Stayed { player, score });
            }
        }
        drop(players);
        self.pending.lock().clear();
    }

    /// Returns every player tied for the top score, once someone has reached
    /// the winning score.
    ///
    /// Empty while nobody has reached it.
    pub fn winners(&self) -> Vec<usize> {
        let scores = self.scores.lock();
        let Some(&top) = scores.iter().max() else {
            return Vec::new();
        };
        if top < self.options.winning_score {
            return Vec::new();
        }

        scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == top)
            .map(|(player, _)| player)
            .collect()
    }

    /// Returns the winner, if the game is decided.
    ///
    /// The winner has the highest cumulative score among players at or above
    /// the winning score. Ties follow [`crate::GameOptions::tie_break`].
    pub fn check_winner(&self) -> Option<usize> {
        let winners = self.winners();
        match (winners.as_slice(), self.options.tie_break) {
            ([only], _) => Some(*only),
            ([first, ..], TieBreak::LowestIndex) => Some(*first),
            _ => None,
        }
    }
}
