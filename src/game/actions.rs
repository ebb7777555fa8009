use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, DeckError};
use crate::event::RoundEvent;
use crate::player::Draw;

use super::{Game, GameState, PendingTarget};

impl Game {
    fn ensure_player_turn(&self, player: usize) -> Result<(), ActionError> {
        match *self.state.lock() {
            GameState::PlayerTurn => {}
            GameState::AwaitingTarget => return Err(ActionError::TargetPending),
            GameState::GameOver => return Err(ActionError::GameOver),
            GameState::WaitingForRound | GameState::RoundOver => {
                return Err(ActionError::InvalidState);
            }
        }

        let status = self.get_status(player).ok_or(ActionError::PlayerNotFound)?;
        if status.is_terminal() {
            return Err(ActionError::ActionOnTerminalPlayer);
        }

        if *self.current_turn.lock() != player {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Spends a frozen player's visit. Returns `false` if the player was not
    /// frozen.
    fn consume_freeze(&self, player: usize, events: &mut Vec<RoundEvent>) -> bool {
        if !self.players.lock()[player].thaw() {
            return false;
        }

        tracing::debug!(player, "frozen player loses the turn");
        events.push(RoundEvent::FreezeConsumed { player });
        self.advance_turn(events);
        true
    }

    /// Draws one card into the player's hand and resolves it.
    pub(super) fn draw_for(&self, player: usize) -> Result<(Card, Draw), DeckError> {
        let card = self.deck.lock().draw()?;
        let draw = self.players.lock()[player].receive(card);
        Ok((card, draw))
    }

    /// Reports a resolved draw.
    pub(super) fn record_draw(
        &self,
        player: usize,
        card: Card,
        draw: Draw,
        events: &mut Vec<RoundEvent>,
    ) {
        tracing::debug!(player, %card, "card drawn");
        events.push(RoundEvent::Drew { player, card });

        match draw {
            Draw::Kept => {}
            Draw::SecondChanceUsed(value) => {
                tracing::debug!(player, value, "second chance cancels duplicate");
                events.push(RoundEvent::SecondChanceUsed { player, value });
            }
            Draw::Busted => {
                tracing::info!(player, %card, "player busted");
                events.push(RoundEvent::Busted { player });
            }
            Draw::SevenUnique(score) => {
                tracing::info!(player, score, "player collected seven unique numbers");
                events.push(RoundEvent::SevenUnique { player, score });
                if self.options.seven_unique_ends_round {
                    self.close_round(events);
                }
            }
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A frozen player's hit draws nothing and only clears the freeze. A
    /// Freeze or Flip Three suspends the turn until
    /// [`Game::resolve_target`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running, a target is pending, the
    /// player does not exist, is out of the round or does not hold the turn,
    /// or the deck is empty. A failed hit changes nothing.
    pub fn hit(&self, player: usize) -> Result<Vec<RoundEvent>, ActionError> {
        self.ensure_player_turn(player)?;

        let mut events = Vec::new();
        if self.consume_freeze(player, &mut events) {
            return Ok(events);
        }

        let (card, draw) = self
            .draw_for(player)
            .map_err(|_| ActionError::DeckExhausted)?;
        self.record_draw(player, card, draw, &mut events);

        if draw == Draw::Kept {
            if let Some(action) = card.target_action() {
                self.queue_target(
                    PendingTarget {
                        action,
                        source: player,
                    },
                    &mut events,
                );
                return Ok(events);
            }
        }

        self.advance_turn(&mut events);
        Ok(events)
    }

    /// Player action: Stay (stop drawing and keep the current score).
    ///
    /// A frozen player may still stay; the freeze is dropped with them.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running, a target is pending, the
    /// player does not exist, is out of the round or does not hold the turn.
    pub fn stay(&self, player: usize) -> Result<Vec<RoundEvent>, ActionError> {
        self.ensure_player_turn(player)?;

        let mut events = Vec::new();
        let score = self.players.lock()[player].stay();
        tracing::debug!(player, score, "player stayed");
        events.push(RoundEvent::Stayed { player, score });

        self.advance_turn(&mut events);
        Ok(events)
    }
}
