//! The AI seat's decision heuristic.
//!
//! Two phases, run once per desired play:
//!
//! 1. **Reverser phase**: scan the hand in index order and the piles in
//!    table order; the first card sitting exactly 10 into a pile's illegal
//!    direction is played on the spot. Reversers are pure profit: they
//!    move a pile backwards, so they always outrank a "good" ordinary
//!    play.
//! 2. **Best-value phase**: otherwise, over every directionally legal
//!    (card, pile) pair, pick the smallest gap to the pile's top. Ties
//!    prefer to *hold on to* cards that pair up with another held card at
//!    exactly ±10: if only the standing best would burn such a pair, the
//!    candidate takes its place; if both would, a coin decides; if only
//!    the candidate would, the standing best simply stays. That last case
//!    is asymmetric on purpose, matching the general preference for
//!    keeping future reversals in hand.
//!
//! The selector owns a forked [`GameRng`] so the tie-break coin never
//! touches any other consumer's stream.

use crate::core::card::Card;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::zones::hand::Hand;
use crate::zones::pile::{PileId, Piles};

use super::{MoveSelector, TurnAction};

/// Heuristic selector for an AI seat.
#[derive(Clone, Debug)]
pub struct AiSelector {
    rng: GameRng,
}

impl AiSelector {
    /// Create a selector with its own rng stream (fork it off the match
    /// rng so runs stay reproducible).
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    fn find_reverser(hand: &Hand, piles: &Piles) -> Option<(usize, PileId)> {
        for (card_index, &card) in hand.cards().iter().enumerate() {
            for pile_id in PileId::ALL {
                if piles[pile_id].is_reverser(card) {
                    return Some((card_index, pile_id));
                }
            }
        }
        None
    }

    fn best_value_play(&mut self, hand: &Hand, piles: &Piles) -> Option<(usize, PileId)> {
        let mut best: Option<(usize, PileId, u8)> = None;

        for (card_index, &card) in hand.cards().iter().enumerate() {
            for pile_id in PileId::ALL {
                let pile = &piles[pile_id];
                if !pile.follows_direction(card) {
                    continue;
                }
                let difference = card.distance_from(pile.top_value());

                match best {
                    None => best = Some((card_index, pile_id, difference)),
                    Some((best_index, _, best_difference)) if difference == best_difference => {
                        let candidate_pairs = has_reversal_partner(hand, card);
                        let standing_pairs = has_reversal_partner(hand, hand.get(best_index));
                        let replace = match (candidate_pairs, standing_pairs) {
                            (false, true) => true,
                            (true, true) => self.rng.coin_flip(),
                            _ => false,
                        };
                        if replace {
                            best = Some((card_index, pile_id, difference));
                        }
                    }
                    Some((_, _, best_difference)) if difference < best_difference => {
                        best = Some((card_index, pile_id, difference));
                    }
                    _ => {}
                }
            }
        }

        best.map(|(card_index, pile_id, _)| (card_index, pile_id))
    }
}

/// True if some held card sits exactly 10 away from `card`.
fn has_reversal_partner(hand: &Hand, card: Card) -> bool {
    hand.cards()
        .iter()
        .any(|&other| card.distance_from(other.value()) == 10)
}

impl MoveSelector for AiSelector {
    fn select(&mut self, state: &GameState, seat: PlayerId, _plays_made: u32) -> TurnAction {
        let hand = state.player(seat).hand();

        if let Some((card_index, pile)) = Self::find_reverser(hand, state.piles()) {
            return TurnAction::Play { card_index, pile };
        }

        match self.best_value_play(hand, state.piles()) {
            Some((card_index, pile)) => TurnAction::Play { card_index, pile },
            None => TurnAction::EndTurn,
        }
    }
}
