//! Whole-game state.
//!
//! `GameState` owns everything a match needs: the shared draw deck, the
//! four table piles, the seated players, the completed-turn counter, and
//! the append-only play history. It is built once per match via
//! [`GameBuilder`], mutated strictly turn-by-turn, and dropped at match
//! end; nothing outlives it and nothing aliases it.
//!
//! The turn counter drives seating: the active seat is always
//! `turns % player_count`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::{hand_size_for, Player, PlayerId, PlayerKind, MAX_PLAYERS, MIN_PLAYERS};
use super::rng::GameRng;
use crate::zones::deck::DrawDeck;
use crate::zones::pile::{PileId, Piles};

/// One applied play, as recorded in the history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// 0-based index of the turn the play happened in.
    pub turn: u32,
    /// Who played.
    pub seat: PlayerId,
    /// The card played.
    pub card: Card,
    /// Where it landed.
    pub pile: PileId,
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck: DrawDeck,
    piles: Piles,
    players: Vec<Player>,
    turns: u32,
    history: Vector<PlayRecord>,
}

impl GameState {
    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Count of completed turns.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The seat whose turn it is (or will be next).
    #[must_use]
    pub fn active_seat(&self) -> PlayerId {
        PlayerId::new((self.turns % self.players.len() as u32) as u8)
    }

    /// Get a seated player.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat.index()]
    }

    /// Iterate over `(PlayerId, &Player)` pairs in seating order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId::new(i as u8), p))
    }

    /// The shared draw deck.
    #[must_use]
    pub fn deck(&self) -> &DrawDeck {
        &self.deck
    }

    /// The four table piles.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// The four table piles, mutably. Plays made through [`apply_play`]
    /// keep the history consistent; direct pile access is for scenario
    /// setup.
    ///
    /// [`apply_play`]: GameState::apply_play
    pub fn piles_mut(&mut self) -> &mut Piles {
        &mut self.piles
    }

    /// The play history so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    /// True if any card in the seat's hand is a valid play on any pile.
    #[must_use]
    pub fn has_valid_play(&self, seat: PlayerId) -> bool {
        self.piles.any_valid_play(self.player(seat).hand().cards())
    }

    /// Check one specific move without applying it.
    ///
    /// Panics when `card_index` is out of the hand's bounds.
    #[must_use]
    pub fn is_valid_play(&self, seat: PlayerId, card_index: usize, pile: PileId) -> bool {
        let card = self.player(seat).hand().get(card_index);
        self.piles[pile].is_valid_play(card)
    }

    /// Apply an already-validated play: remove the card from the hand,
    /// append it to the pile, and record it in the history. Returns the
    /// card that was played.
    ///
    /// Panics when `card_index` is out of the hand's bounds.
    pub fn apply_play(&mut self, seat: PlayerId, card_index: usize, pile: PileId) -> Card {
        let card = self.players[seat.index()].hand_mut().remove(card_index);
        self.piles.get_mut(pile).play(card);
        self.history.push_back(PlayRecord {
            turn: self.turns,
            seat,
            card,
            pile,
        });
        card
    }

    /// Replenish a seat's hand with up to `count` cards from the deck,
    /// never past the hand's target size. Returns the number actually
    /// received, which the deck's deal guard may cut short.
    pub fn refill_hand(&mut self, seat: PlayerId, count: usize) -> usize {
        let player = &mut self.players[seat.index()];
        let want = count.min(player.hand().room());
        let batch = self.deck.deal(want);
        let dealt = batch.len();
        player.hand_mut().insert_all(batch);
        dealt
    }

    /// Mark the active seat's turn as completed, rotating to the next.
    pub fn advance_turn(&mut self) {
        self.turns += 1;
    }
}

/// Builder for a fully initialized match.
///
/// ```
/// use cardclimb::core::{GameBuilder, GameRng};
///
/// let mut rng = GameRng::new(42);
/// let state = GameBuilder::new()
///     .human("Ada")
///     .ai("Crow")
///     .build(&mut rng);
///
/// assert_eq!(state.player_count(), 2);
/// assert_eq!(state.player(cardclimb::core::PlayerId::new(0)).hand().len(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    seats: Vec<(String, PlayerKind)>,
    shuffle_rounds: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Standard number of shuffle rounds.
    pub const DEFAULT_SHUFFLE_ROUNDS: u32 = 1000;

    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seats: Vec::new(),
            shuffle_rounds: Self::DEFAULT_SHUFFLE_ROUNDS,
        }
    }

    /// Override the shuffle round count (tests use small values).
    #[must_use]
    pub fn shuffle_rounds(mut self, rounds: u32) -> Self {
        self.shuffle_rounds = rounds;
        self
    }

    /// Add a seat.
    #[must_use]
    pub fn seat(mut self, name: impl Into<String>, kind: PlayerKind) -> Self {
        self.seats.push((name.into(), kind));
        self
    }

    /// Add a human seat.
    #[must_use]
    pub fn human(self, name: impl Into<String>) -> Self {
        self.seat(name, PlayerKind::Human)
    }

    /// Add an AI seat.
    #[must_use]
    pub fn ai(self, name: impl Into<String>) -> Self {
        self.seat(name, PlayerKind::Ai)
    }

    /// Build the match: shuffle the deck with the injected rng, seed the
    /// piles, and deal every seat its starting hand.
    ///
    /// Panics unless 1-5 seats were added.
    #[must_use]
    pub fn build(self, rng: &mut GameRng) -> GameState {
        let rounds = self.shuffle_rounds;
        self.build_with_deck(DrawDeck::new(rng, rounds))
    }

    /// Build the match around an explicit deck (stacked scenarios deal in
    /// the deck's given order).
    ///
    /// Panics unless 1-5 seats were added.
    #[must_use]
    pub fn build_with_deck(self, mut deck: DrawDeck) -> GameState {
        let count = self.seats.len();
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
            "player count out of range"
        );

        let hand_size = hand_size_for(count);

        let players = self
            .seats
            .into_iter()
            .map(|(name, kind)| {
                let mut player = Player::new(name, kind, hand_size);
                player.hand_mut().insert_all(deck.deal(hand_size));
                player
            })
            .collect();

        GameState {
            deck,
            piles: Piles::new(),
            players,
            turns: 0,
            history: Vector::new(),
        }
    }
}
