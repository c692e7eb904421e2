//! A player's hand.
//!
//! Hands are bounded at 8 cards and kept sorted ascending at all times, so
//! the indices a selector sees are stable between plays and unused capacity
//! is simply absent rather than marked. The per-game target size
//! (`max_size`) is fixed at construction from the player count.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// A sorted, bounded hand of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
    max_size: usize,
}

impl Hand {
    /// Hard capacity of any hand, regardless of player count.
    pub const CAPACITY: usize = 8;

    /// Create an empty hand with the given target size.
    ///
    /// Panics if `max_size` exceeds [`Hand::CAPACITY`].
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        assert!(max_size <= Self::CAPACITY, "hand target exceeds capacity");
        Self {
            cards: SmallVec::new(),
            max_size,
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The target size this hand is replenished toward.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// How many cards the hand can still take before its target size.
    #[must_use]
    pub fn room(&self) -> usize {
        self.max_size.saturating_sub(self.cards.len())
    }

    /// The held cards in ascending order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the card at `index`.
    ///
    /// Panics when `index` is out of bounds; a bad index is a caller
    /// contract violation, not a game state.
    #[must_use]
    pub fn get(&self, index: usize) -> Card {
        self.cards[index]
    }

    /// Insert a card, keeping the sorted order.
    ///
    /// Panics past [`Hand::CAPACITY`].
    pub fn insert(&mut self, card: Card) {
        assert!(self.cards.len() < Self::CAPACITY, "hand over capacity");
        let position = self.cards.partition_point(|&held| held <= card);
        self.cards.insert(position, card);
    }

    /// Insert every card in a dealt batch.
    pub fn insert_all(&mut self, batch: impl IntoIterator<Item = Card>) {
        for card in batch {
            self.insert(card);
        }
    }

    /// Remove and return the card at `index`. Later cards shift down, so
    /// the sorted order is preserved.
    ///
    /// Panics when `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Card {
        assert!(index < self.cards.len(), "hand index out of bounds");
        self.cards.remove(index)
    }
}
