//! Card faces and the deck identifier mapping.

use core::fmt;

/// Number of identifiers in a full deck.
pub const DECK_SIZE: usize = 94;

/// Highest value printed on a number card.
pub const MAX_NUMBER: u8 = 12;

/// A card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// Number card worth its face value (0 through 12).
    Number(u8),
    /// Additive modifier (+2, +4, +6, +8 or +10).
    Additive(u8),
    /// The x2 modifier.
    Multiplier,
    /// Skips the target's next turn.
    Freeze,
    /// Forces the target to draw three cards.
    FlipThree,
    /// Cancels one duplicate number.
    SecondChance,
}

/// An action card that needs a target before play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetAction {
    /// See [`Card::Freeze`].
    Freeze,
    /// See [`Card::FlipThree`].
    FlipThree,
}

impl Card {
    /// Maps a deck identifier (`1..=94`) to its card face.
    ///
    /// Identifiers are frequency weighted: `0` and `1` appear once, every
    /// other number `n` appears `n` times, followed by the five additive
    /// modifiers, the multiplier and three copies of each action card.
    /// Returns `None` outside the identifier range.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Number(0)),
            2..=79 => {
                // Number n occupies identifiers up to 1 + n(n+1)/2.
                let mut value: u8 = 1;
                while 1 + value * (value + 1) / 2 < id {
                    value += 1;
                }
                Some(Self::Number(value))
            }
            80..=84 => Some(Self::Additive((id - 79) * 2)),
            85 => Some(Self::Multiplier),
            86..=88 => Some(Self::Freeze),
            89..=91 => Some(Self::FlipThree),
            92..=94 => Some(Self::SecondChance),
            _ => None,
        }
    }

    /// Returns the face value for number cards.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the action this card asks its drawer to target, if any.
    #[must_use]
    pub const fn target_action(self) -> Option<TargetAction> {
        match self {
            Self::Freeze => Some(TargetAction::Freeze),
            Self::FlipThree => Some(TargetAction::FlipThree),
            _ => None,
        }
    }

    /// Returns whether this is one of the three action cards.
    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, Self::Freeze | Self::FlipThree | Self::SecondChance)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Additive(amount) => write!(f, "+{amount}"),
            Self::Multiplier => f.write_str("x2"),
            Self::Freeze => f.write_str("Freeze"),
            Self::FlipThree => f.write_str("Flip Three"),
            Self::SecondChance => f.write_str("Second Chance"),
        }
    }
}

impl fmt::Display for TargetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Freeze => f.write_str("Freeze"),
            Self::FlipThree => f.write_str("Flip Three"),
        }
    }
}
