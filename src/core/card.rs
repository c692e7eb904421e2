//! Card values.
//!
//! Real cards carry the values `2..=99`. The pile base values (1 and 100)
//! are not cards; they only ever appear as the top value of an empty pile.

use serde::{Deserialize, Serialize};

/// A single card, identified by its face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Lowest card value in the deck.
    pub const MIN: u8 = 2;
    /// Highest card value in the deck.
    pub const MAX: u8 = 99;

    /// Create a card.
    ///
    /// Panics if `value` is outside `2..=99`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= Self::MIN && value <= Self::MAX, "card value out of range");
        Self(value)
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Absolute difference between this card and an arbitrary top value.
    ///
    /// Top values include the pile bases 1 and 100, so the comparison is
    /// widened rather than done in `u8`.
    #[must_use]
    pub const fn distance_from(self, top: u8) -> u8 {
        (self.0 as i16 - top as i16).unsigned_abs() as u8
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
