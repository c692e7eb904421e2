//! Play piles and the placement contract.
//!
//! The table holds exactly four piles in fixed order: two ascending, then
//! two descending. An ascending pile starts from the base value 1 and wants
//! strictly larger cards; a descending pile starts from 100 and wants
//! strictly smaller ones. Either direction may be reversed by playing a
//! card exactly 10 away from the current top.
//!
//! The base values are chosen so that every real card (2..=99) is a legal
//! play on an empty pile.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// Which way a pile climbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileDirection {
    /// Wants strictly larger cards; base value 1.
    Ascending,
    /// Wants strictly smaller cards; base value 100.
    Descending,
}

impl PileDirection {
    /// Top value of an empty pile of this direction.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            PileDirection::Ascending => 1,
            PileDirection::Descending => 100,
        }
    }
}

/// Pile identifier, `0..4`. The table order is fixed:
/// ascending, ascending, descending, descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(u8);

impl PileId {
    /// All four pile ids in table order.
    pub const ALL: [PileId; 4] = [PileId(0), PileId(1), PileId(2), PileId(3)];

    /// Create a pile ID.
    ///
    /// Panics if `id` is not below 4.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 4, "pile id out of range");
        Self(id)
    }

    /// Get the raw pile index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// One directional pile of played cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPile {
    direction: PileDirection,
    cards: Vec<Card>,
}

impl PlayPile {
    /// Most cards a pile can ever hold (the whole deck).
    pub const CAPACITY: usize = 98;

    /// Create an empty pile.
    #[must_use]
    pub fn new(direction: PileDirection) -> Self {
        Self {
            direction,
            cards: Vec::new(),
        }
    }

    /// Get the pile's direction.
    #[must_use]
    pub fn direction(&self) -> PileDirection {
        self.direction
    }

    /// Number of cards played onto this pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if nothing has been played here yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards played onto this pile, in play order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The value a new play is compared against: the last played card, or
    /// the direction's base value while the pile is empty.
    #[must_use]
    pub fn top_value(&self) -> u8 {
        self.cards.last().map_or(self.direction.base_value(), |c| c.value())
    }

    /// True if `card` continues the pile's direction (larger on ascending,
    /// smaller on descending).
    #[must_use]
    pub fn follows_direction(&self, card: Card) -> bool {
        let top = self.top_value();
        match self.direction {
            PileDirection::Ascending => card.value() > top,
            PileDirection::Descending => card.value() < top,
        }
    }

    /// True if `card` is exactly 10 into the normally illegal direction:
    /// 10 below an ascending top, or 10 above a descending one.
    #[must_use]
    pub fn is_reverser(&self, card: Card) -> bool {
        let top = self.top_value() as i16;
        match self.direction {
            PileDirection::Ascending => card.value() as i16 == top - 10,
            PileDirection::Descending => card.value() as i16 == top + 10,
        }
    }

    /// The whole placement contract: a play is valid iff the card is
    /// exactly 10 away from the top, or continues the pile's direction.
    #[must_use]
    pub fn is_valid_play(&self, card: Card) -> bool {
        card.distance_from(self.top_value()) == 10 || self.follows_direction(card)
    }

    /// Append a card without validating it.
    ///
    /// Callers have already validated: the turn machine checks every
    /// human-originated move, and the AI selector only ever proposes legal
    /// plays. Panics past [`PlayPile::CAPACITY`].
    pub fn play(&mut self, card: Card) {
        assert!(self.cards.len() < Self::CAPACITY, "pile over capacity");
        self.cards.push(card);
    }
}

/// The four table piles in fixed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    piles: [PlayPile; 4],
}

impl Piles {
    /// Create the standard table: ascending, ascending, descending,
    /// descending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: [
                PlayPile::new(PileDirection::Ascending),
                PlayPile::new(PileDirection::Ascending),
                PlayPile::new(PileDirection::Descending),
                PlayPile::new(PileDirection::Descending),
            ],
        }
    }

    /// Get a pile.
    #[must_use]
    pub fn get(&self, id: PileId) -> &PlayPile {
        &self.piles[id.index()]
    }

    /// Get a pile mutably.
    pub fn get_mut(&mut self, id: PileId) -> &mut PlayPile {
        &mut self.piles[id.index()]
    }

    /// Iterate over `(PileId, &PlayPile)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (PileId, &PlayPile)> {
        PileId::ALL.iter().map(move |&id| (id, self.get(id)))
    }

    /// True if any of the given cards is a valid play on any pile.
    #[must_use]
    pub fn any_valid_play(&self, cards: &[Card]) -> bool {
        cards
            .iter()
            .any(|&card| self.piles.iter().any(|pile| pile.is_valid_play(card)))
    }
}

impl Default for Piles {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<PileId> for Piles {
    type Output = PlayPile;

    fn index(&self, id: PileId) -> &Self::Output {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending_with_top(top: u8) -> PlayPile {
        let mut pile = PlayPile::new(PileDirection::Ascending);
        pile.play(Card::new(top));
        pile
    }

    fn descending_with_top(top: u8) -> PlayPile {
        let mut pile = PlayPile::new(PileDirection::Descending);
        pile.play(Card::new(top));
        pile
    }

    #[test]
    fn test_empty_pile_top_is_base_value() {
        assert_eq!(PlayPile::new(PileDirection::Ascending).top_value(), 1);
        assert_eq!(PlayPile::new(PileDirection::Descending).top_value(), 100);
    }

    #[test]
    fn test_every_card_plays_on_an_empty_pile() {
        let asc = PlayPile::new(PileDirection::Ascending);
        let desc = PlayPile::new(PileDirection::Descending);

        for value in Card::MIN..=Card::MAX {
            assert!(asc.is_valid_play(Card::new(value)));
            assert!(desc.is_valid_play(Card::new(value)));
        }
    }

    #[test]
    fn test_ascending_placement_contract() {
        let pile = ascending_with_top(45);

        assert!(pile.is_valid_play(Card::new(46)));
        assert!(pile.is_valid_play(Card::new(99)));
        assert!(pile.is_valid_play(Card::new(35))); // ten-below reversal
        assert!(!pile.is_valid_play(Card::new(44)));
        assert!(!pile.is_valid_play(Card::new(45)));
        assert!(!pile.is_valid_play(Card::new(2)));
    }

    #[test]
    fn test_descending_placement_contract() {
        let pile = descending_with_top(45);

        assert!(pile.is_valid_play(Card::new(44)));
        assert!(pile.is_valid_play(Card::new(2)));
        assert!(pile.is_valid_play(Card::new(55))); // ten-above reversal
        assert!(!pile.is_valid_play(Card::new(46)));
        assert!(!pile.is_valid_play(Card::new(45)));
        assert!(!pile.is_valid_play(Card::new(99)));
    }

    #[test]
    fn test_reverser_detection() {
        let asc = ascending_with_top(45);
        assert!(asc.is_reverser(Card::new(35)));
        assert!(!asc.is_reverser(Card::new(55)));
        assert!(!asc.is_reverser(Card::new(36)));

        let desc = descending_with_top(45);
        assert!(desc.is_reverser(Card::new(55)));
        assert!(!desc.is_reverser(Card::new(35)));
    }

    #[test]
    fn test_play_moves_the_top() {
        let mut pile = PlayPile::new(PileDirection::Ascending);
        pile.play(Card::new(10));
        pile.play(Card::new(20));

        assert_eq!(pile.top_value(), 20);
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.cards(), &[Card::new(10), Card::new(20)]);
    }

    #[test]
    #[should_panic(expected = "pile over capacity")]
    fn test_pile_capacity_is_fatal() {
        let mut pile = PlayPile::new(PileDirection::Ascending);
        for _ in 0..=PlayPile::CAPACITY {
            pile.play(Card::new(50));
        }
    }

    #[test]
    fn test_table_order() {
        let piles = Piles::new();
        assert_eq!(piles[PileId::new(0)].direction(), PileDirection::Ascending);
        assert_eq!(piles[PileId::new(1)].direction(), PileDirection::Ascending);
        assert_eq!(piles[PileId::new(2)].direction(), PileDirection::Descending);
        assert_eq!(piles[PileId::new(3)].direction(), PileDirection::Descending);
    }

    #[test]
    fn test_any_valid_play() {
        let mut piles = Piles::new();
        for id in PileId::ALL {
            let filler = match piles[id].direction() {
                PileDirection::Ascending => Card::new(98),
                PileDirection::Descending => Card::new(3),
            };
            piles.get_mut(id).play(filler);
        }

        // 99 still goes up, everything else is dead.
        assert!(piles.any_valid_play(&[Card::new(99)]));
        assert!(piles.any_valid_play(&[Card::new(50), Card::new(88)])); // 88 reverses a 98
        assert!(!piles.any_valid_play(&[Card::new(50), Card::new(60)]));
        assert!(!piles.any_valid_play(&[]));
    }

    #[test]
    #[should_panic(expected = "pile id out of range")]
    fn test_pile_id_out_of_range() {
        let _ = PileId::new(4);
    }
}
