//! Per-round player state and draw resolution.

use crate::card::Card;
use crate::hand::Hand;
use crate::scoring::UNIQUE_TARGET;

/// Why a player finished the round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Collected seven distinct numbers.
    SevenUnique,
}

/// Player status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Still drawing.
    Active,
    /// Stopped and will bank the hand scored at that moment.
    Stayed,
    /// Drew an uncancelled duplicate; banks nothing.
    Busted,
    /// Ended the round early.
    Finished(FinishReason),
}

impl PlayerStatus {
    /// Returns whether the player is done for the round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// What happened when a card landed in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// The card stays in hand and the player is still active.
    Kept,
    /// A duplicate of this number was cancelled by a Second Chance.
    SecondChanceUsed(u8),
    /// The player busted.
    Busted,
    /// The player reached seven distinct numbers with this score.
    SevenUnique(u32),
}

/// One player's state for the current round.
#[derive(Debug, Clone)]
pub struct PlayerRound {
    hand: Hand,
    status: PlayerStatus,
    /// Skip the next visit in turn order.
    frozen: bool,
    /// Score fixed when the player became terminal.
    locked_score: Option<u32>,
}

impl PlayerRound {
    /// Creates an active player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            status: PlayerStatus::Active,
            frozen: false,
            locked_score: None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns whether the player's next visit will be skipped.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns the score this player would bank right now.
    ///
    /// Terminal players report the score fixed when they stopped; busted
    /// players always report zero.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        match self.status {
            PlayerStatus::Busted => 0,
            _ => self.locked_score.unwrap_or_else(|| self.hand.score()),
        }
    }

    /// Adds a drawn card and resolves duplicates and the 7-unique check.
    pub fn receive(&mut self, card: Card) -> Draw {
        self.hand.add_card(card);

        let Card::Number(value) = card else {
            return Draw::Kept;
        };

        if self.hand.count_number(value) > 1 {
            if self.hand.spend_second_chance(value) {
                return Draw::SecondChanceUsed(value);
            }
            self.status = PlayerStatus::Busted;
            self.frozen = false;
            self.locked_score = Some(0);
            return Draw::Busted;
        }

        if self.hand.unique_number_count() == UNIQUE_TARGET {
            let score = self.hand.score();
            self.status = PlayerStatus::Finished(FinishReason::SevenUnique);
            self.frozen = false;
            self.locked_score = Some(score);
            return Draw::SevenUnique(score);
        }

        Draw::Kept
    }

    /// Stops drawing and fixes the current score.
    pub fn stay(&mut self) -> u32 {
        let score = self.hand.score();
        self.status = PlayerStatus::Stayed;
        self.frozen = false;
        self.locked_score = Some(score);
        score
    }

    /// Marks the player to lose their next visit.
    pub const fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Clears a pending freeze, returning whether one was set.
    pub const fn thaw(&mut self) -> bool {
        let was_frozen = self.frozen;
        self.frozen = false;
        was_frozen
    }

    /// Resets the player for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.status = PlayerStatus::Active;
        self.frozen = false;
        self.locked_score = None;
    }
}

impl Default for PlayerRound {
    fn default() -> Self {
        Self::new()
    }
}
