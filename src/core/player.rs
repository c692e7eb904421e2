//! Player identity and seats.
//!
//! A match seats 1-5 players. Each seat is either a human (decisions come
//! from an external input provider) or an AI (decisions come from the
//! in-crate selector); the kind is fixed for the whole match and the
//! per-turn decision path is dispatched through the `MoveSelector`
//! capability interface rather than branched on inline.

use serde::{Deserialize, Serialize};

use crate::zones::hand::Hand;

/// Fewest seats a match can have.
pub const MIN_PLAYERS: usize = 1;
/// Most seats a match can have.
pub const MAX_PLAYERS: usize = 5;

/// Target hand size for a match with `player_count` seats.
///
/// 1 player gets 8 cards, 2 players get 7, 3-5 players get 6.
/// Panics outside 1..=5; a bad seat count is a construction-time fatal.
#[must_use]
pub fn hand_size_for(player_count: usize) -> usize {
    match player_count {
        1 => 8,
        2 => 7,
        3..=5 => 6,
        _ => panic!("player count out of range"),
    }
}

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a match with `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Whether a seat's moves come from a human or the AI heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// One seated player: identity plus the hand they hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    hand: Hand,
}

impl Player {
    /// Create a player with an empty hand of the given target size.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind, max_hand_size: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Hand::new(max_hand_size),
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or AI.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The player's hand, mutably.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let seats: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(seats.len(), 4);
        assert_eq!(seats[0], PlayerId::new(0));
        assert_eq!(seats[3], PlayerId::new(3));
    }

    #[test]
    fn test_hand_size_for_each_count() {
        assert_eq!(hand_size_for(1), 8);
        assert_eq!(hand_size_for(2), 7);
        assert_eq!(hand_size_for(3), 6);
        assert_eq!(hand_size_for(4), 6);
        assert_eq!(hand_size_for(5), 6);
    }

    #[test]
    #[should_panic(expected = "player count out of range")]
    fn test_zero_players_is_fatal() {
        let _ = hand_size_for(0);
    }

    #[test]
    #[should_panic(expected = "player count out of range")]
    fn test_six_players_is_fatal() {
        let _ = hand_size_for(6);
    }

    #[test]
    fn test_player_starts_with_empty_hand() {
        let player = Player::new("Ada", PlayerKind::Human, 7);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.kind(), PlayerKind::Human);
        assert!(player.hand().is_empty());
        assert_eq!(player.hand().max_size(), 7);
    }
}
