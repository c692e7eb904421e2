//! The shared draw deck.
//!
//! One 98-card deck (`2..=99`, each value once) feeds every hand. Cards are
//! dealt in storage order from a monotone cursor; a decrementing count of
//! undealt cards is kept alongside it, with the invariant
//! `remaining == cards.len() - cursor`.
//!
//! Two boundaries are deliberate and load-bearing for end-game timing:
//!
//! - The shuffle swaps positions drawn from `0..len-1`, so the final
//!   storage slot is never chosen as a swap endpoint and the last card is
//!   slightly under-shuffled. The shuffle is an opaque randomization, not a
//!   provably uniform one.
//! - Dealing refuses outright once fewer than two cards sit past the
//!   cursor, which can strand a single card: the deck then never deals
//!   again but still counts one remaining card toward the score, and it
//!   only counts as an empty set once the cursor has consumed every slot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::rng::GameRng;

/// The face-down draw deck with its deal cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawDeck {
    cards: Vec<Card>,
    cursor: usize,
    remaining: usize,
}

impl DrawDeck {
    /// Cards in a standard deck: one of each value `2..=99`.
    pub const STANDARD_SIZE: usize = 98;

    /// Build and shuffle a standard deck.
    #[must_use]
    pub fn new(rng: &mut GameRng, shuffle_rounds: u32) -> Self {
        let cards: Vec<Card> = (Card::MIN..=Card::MAX).map(Card::new).collect();
        let mut deck = Self {
            remaining: cards.len(),
            cursor: 0,
            cards,
        };
        deck.shuffle(rng, shuffle_rounds);
        deck
    }

    /// Build a deck with an explicit, unshuffled order. Dealing starts at
    /// the front. Intended for stacked scenarios in tests.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            remaining: cards.len(),
            cursor: 0,
            cards,
        }
    }

    /// Shuffle by `rounds` random pairwise swaps.
    ///
    /// Each round picks two distinct positions in `0..len-1`; the last
    /// storage slot is never an endpoint (see the module docs).
    pub fn shuffle(&mut self, rng: &mut GameRng, rounds: u32) {
        // Two distinct swappable positions must exist below the excluded
        // last slot.
        if self.cards.len() < 3 {
            return;
        }
        let limit = self.cards.len() - 1;
        for _ in 0..rounds {
            let first = rng.gen_index(0..limit);
            let second = loop {
                let candidate = rng.gen_index(0..limit);
                if candidate != first {
                    break candidate;
                }
            };
            self.swap_positions(first, second);
        }
    }

    /// Swap the cards at two storage positions. Swapping a position with
    /// itself leaves the deck unchanged.
    pub fn swap_positions(&mut self, first: usize, second: usize) {
        self.cards.swap(first, second);
    }

    /// Deal up to `count` cards in cursor order.
    ///
    /// Deals nothing once fewer than two cards remain past the cursor, and
    /// never more than actually remain. Advances the cursor and decrements
    /// the remaining count by the number dealt.
    pub fn deal(&mut self, count: usize) -> SmallVec<[Card; 8]> {
        if !self.can_deal() {
            return SmallVec::new();
        }
        let take = count.min(self.cards.len() - self.cursor);
        let batch = self.cards[self.cursor..self.cursor + take].iter().copied().collect();
        self.cursor += take;
        self.remaining -= take;
        debug_assert_eq!(self.remaining, self.cards.len() - self.cursor);
        batch
    }

    /// True while the deal guard permits another deal.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.cursor + 1 < self.cards.len()
    }

    /// True once the cursor has consumed every slot. A card stranded by
    /// the deal guard keeps this false.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.cursor == self.cards.len()
    }

    /// Count of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Full storage order, dealt and undealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
