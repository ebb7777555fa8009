//! Game configuration options.

use core::ops::RangeInclusive;

/// Allowed player counts.
pub const PLAYER_RANGE: RangeInclusive<usize> = 3..=18;

/// How to pick a winner when several players share the top qualifying score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieBreak {
    /// The lowest-indexed tied player wins.
    #[default]
    LowestIndex,
    /// Nobody wins outright; every tied player is a co-winner.
    Shared,
}

/// Configuration options for a Flip 7 game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flip7::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(5)
///     .with_winning_score(150)
///     .with_seven_unique_ends_round(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players.
    pub players: usize,
    /// Cumulative score that ends the game.
    pub winning_score: u32,
    /// Tie-break among players sharing the top qualifying score.
    pub tie_break: TieBreak,
    /// Whether a 7-unique ends the round for every player.
    ///
    /// Players still drawing bank their current hands as if they had stayed.
    pub seven_unique_ends_round: bool,
    /// Whether Freeze and Flip Three cards drawn during a Flip Three are
    /// played by the target once the three draws are done.
    pub deferred_actions: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 3,
            winning_score: 200,
            tie_break: TieBreak::LowestIndex,
            seven_unique_ends_round: false,
            deferred_actions: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// The count is validated when the game is created.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(6);
    /// assert_eq!(options.players, 6);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(100);
    /// assert_eq!(options.winning_score, 100);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the tie-break rule.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::{GameOptions, TieBreak};
    ///
    /// let options = GameOptions::default().with_tie_break(TieBreak::Shared);
    /// assert_eq!(options.tie_break, TieBreak::Shared);
    /// ```
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets whether a 7-unique ends the round for everyone.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_seven_unique_ends_round(true);
    /// assert!(options.seven_unique_ends_round);
    /// ```
    #[must_use]
    pub const fn with_seven_unique_ends_round(mut self, ends_round: bool) -> Self {
        self.seven_unique_ends_round = ends_round;
        self
    }

    /// Sets whether action cards drawn during a Flip Three are played afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_deferred_actions(true);
    /// assert!(options.deferred_actions);
    /// ```
    #[must_use]
    pub const fn with_deferred_actions(mut self, deferred: bool) -> Self {
        self.deferred_actions = deferred;
        self
    }
}
