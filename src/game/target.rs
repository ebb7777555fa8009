use alloc::vec::Vec;

use crate::card::TargetAction;
use crate::error::TargetError;
use crate::event::RoundEvent;
use crate::player::Draw;

use super::{Game, GameState, PendingTarget};

/// Cards drawn by a Flip Three.
const FLIP_THREE_DRAWS: usize = 3;

impl Game {
    /// Returns the players that may be targeted (everyone still in the round).
    pub fn valid_targets(&self) -> Vec<usize> {
        self.players
            .lock()
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.status().is_terminal())
            .map(|(index, _)| index)
            .collect()
    }

    /// Queues an action card and suspends play until it is targeted.
    pub(super) fn queue_target(&self, pending: PendingTarget, events: &mut Vec<RoundEvent>) {
        self.pending.lock().push_back(pending);
        self.prompt_target(events);
    }

    /// Asks for the oldest pending target, if any. Returns `false` when
    /// nothing is pending.
    fn prompt_target(&self, events: &mut Vec<RoundEvent>) -> bool {
        let Some(pending) = self.pending_target() else {
            return false;
        };

        *self.state.lock() = GameState::AwaitingTarget;
        events.push(RoundEvent::NeedsTarget {
            action: pending.action,
            source: pending.source,
            valid_targets: self.valid_targets(),
        });
        true
    }

    /// Resolves the pending action card against `target`.
    ///
    /// Freeze makes the target lose their next visit. Flip Three makes the
    /// target draw three cards, stopping early on a bust or a 7-unique. Once
    /// nothing is left to target, the turn passes on from the player who
    /// drew the original card.
    ///
    /// # Errors
    ///
    /// Returns an error if no action is waiting, `action` or `source` do not
    /// match it, or `target` is out of range or already out of the round.
    /// A failed call changes nothing.
    pub fn resolve_target(
        &self,
        action: TargetAction,
        source: usize,
        target: usize,
    ) -> Result<Vec<RoundEvent>, TargetError> {
        if *self.state.lock() != GameState::AwaitingTarget {
            return Err(TargetError::NoPendingTarget);
        }

        let pending = self.pending_target().ok_or(TargetError::NoPendingTarget)?;
        if pending.action != action {
            return Err(TargetError::ActionMismatch);
        }
        if pending.source != source {
            return Err(TargetError::SourceMismatch);
        }

        let status = self.get_status(target).ok_or(TargetError::InvalidTarget)?;
        if status.is_terminal() {
            return Err(TargetError::InvalidTarget);
        }

        self.pending.lock().pop_front();
        let mut events = Vec::new();

        match action {
            TargetAction::Freeze => {
                self.players.lock()[target].freeze();
                tracing::debug!(source, target, "freeze played");
                events.push(RoundEvent::Frozen { source, target });
            }
            TargetAction::FlipThree => self.flip_three(source, target, &mut events),
        }

        // Actions queued by players who have since left the round lapse.
        let players = self.players.lock();
        self.pending
            .lock()
            .retain(|pending| !players[pending.source].status().is_terminal());
        drop(players);

        if self.prompt_target(&mut events) {
            return Ok(events);
        }

        *self.state.lock() = GameState::PlayerTurn;
        self.advance_turn(&mut events);
        Ok(events)
    }

    /// Draws up to three cards for `target`.
    fn flip_three(&self, source: usize, target: usize, events: &mut Vec<RoundEvent>) {
        tracing::debug!(source, target, "flip three played");
        events.push(RoundEvent::FlipThreeStarted { source, target });

        let mut deferred = Vec::new();

        for _ in 0..FLIP_THREE_DRAWS {
            let Ok((card, draw)) = self.draw_for(target) else {
                tracing::warn!(target, "deck exhausted during flip three");
                events.push(RoundEvent::DeckExhausted { player: target });
                break;
            };
            self.record_draw(target, card, draw, events);

            match draw {
                Draw::Busted | Draw::SevenUnique(_) => return,
                Draw::SecondChanceUsed(_) => {}
                Draw::Kept => {
                    if let Some(action) = card.target_action() {
                        deferred.push(PendingTarget {
                            action,
                            source: target,
                        });
                    }
                }
            }
        }

        if self.options.deferred_actions {
            self.pending.lock().extend(deferred);
        }
    }
}
