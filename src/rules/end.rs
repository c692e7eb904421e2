//! End-of-game detection.
//!
//! Checked once after every completed turn, fed the play count that turn
//! produced. Three conditions end a match, in this priority order:
//!
//! 1. the upcoming seat still holds cards but has no valid play;
//! 2. every hand and the deck are simultaneously empty (the win);
//! 3. the seat that just moved played fewer than two cards without an
//!    excuse.
//!
//! The under-play excuses: the seat went out (its play count is one more
//! than the hand it was left holding after the draw-back), or it had
//! nothing at all to play on a turn later than the first.
//!
//! A detected end also picks one hand to reveal, so the table can see for
//! itself why the match stopped: the upcoming seat's hand when the last
//! turn met the minimum, otherwise the hand of the seat that came up
//! short. Revealing is the renderer's job; this module only picks whose.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::state::GameState;

use super::turn::MIN_PLAYS_PER_TURN;

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The upcoming seat holds cards but cannot place any of them.
    NextPlayerStuck,
    /// Every hand and the deck are empty.
    AllSetsEmpty,
    /// The last turn played fewer than two cards with no excuse.
    TooFewCardsPlayed,
}

/// A detected match end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub reason: EndReason,
    /// Whose hand to show the table.
    pub reveal: PlayerId,
}

/// Count the exhausted card sets: every empty hand, plus the deck once its
/// cursor has consumed every slot. A card stranded by the deal guard keeps
/// the deck out of this count.
#[must_use]
pub fn empty_sets(state: &GameState) -> usize {
    let empty_hands = state
        .players()
        .filter(|(_, player)| player.hand().is_empty())
        .count();
    empty_hands + usize::from(state.deck().is_spent())
}

/// Decide whether the match is over, given the play count of the turn that
/// just completed. Returns `None` while the match continues, including
/// before any turn has completed, when there is nothing to judge.
#[must_use]
pub fn check_game_over(state: &GameState, cards_played: u32) -> Option<GameOver> {
    if state.turns() == 0 {
        return None;
    }

    let player_count = state.player_count() as u32;
    let last_seat = PlayerId::new(((state.turns() - 1) % player_count) as u8);
    let next_seat = state.active_seat();

    let next_player_stuck =
        !state.player(next_seat).hand().is_empty() && !state.has_valid_play(next_seat);

    let all_sets_empty = empty_sets(state) == state.player_count() + 1;

    let hand_now = state.player(last_seat).hand().len() as u32;
    let went_out = cards_played == hand_now + 1;
    let had_nothing = cards_played == 0 && hand_now == 0;
    let under_played = cards_played < MIN_PLAYS_PER_TURN && !went_out && !had_nothing;

    let reason = if next_player_stuck {
        EndReason::NextPlayerStuck
    } else if all_sets_empty {
        EndReason::AllSetsEmpty
    } else if under_played {
        EndReason::TooFewCardsPlayed
    } else {
        return None;
    };

    let reveal = if cards_played >= MIN_PLAYS_PER_TURN {
        next_seat
    } else {
        last_seat
    };

    Some(GameOver { reason, reveal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Card;
    use crate::core::state::{GameBuilder, GameState};
    use crate::zones::deck::DrawDeck;
    use crate::zones::pile::PileId;

    /// Two AI seats with known hands and a known tail.
    ///
    /// Seat 0: [10, 20, 31, 42, 53, 64, 75]; seat 1: [11, 21, 32, 43, 54,
    /// 65, 76].
    fn known_game() -> GameState {
        let mut cards: Vec<Card> = [10u8, 20, 31, 42, 53, 64, 75]
            .iter()
            .map(|&v| Card::new(v))
            .collect();
        cards.extend([11u8, 21, 32, 43, 54, 65, 76].iter().map(|&v| Card::new(v)));
        cards.extend((80..90).map(Card::new));
        GameBuilder::new()
            .ai("Crow")
            .ai("Rook")
            .build_with_deck(DrawDeck::from_cards(cards))
    }

    fn close_all_piles(state: &mut GameState) {
        for (id, top) in PileId::ALL.into_iter().zip([98u8, 99, 2, 3]) {
            state.piles_mut().get_mut(id).play(Card::new(top));
        }
    }

    #[test]
    fn test_no_verdict_before_any_turn() {
        let state = known_game();
        assert_eq!(check_game_over(&state, 0), None);
    }

    #[test]
    fn test_healthy_match_continues() {
        let mut state = known_game();
        state.advance_turn();
        assert_eq!(check_game_over(&state, 2), None);
    }

    #[test]
    fn test_stuck_next_player_ends_the_match() {
        let mut state = known_game();
        close_all_piles(&mut state);
        state.advance_turn();

        // Seat 1 holds cards but nothing in 11..=76 lands on 98/99 up or
        // 2/3 down, and no reversers (88, 89, 12, 13) are held.
        let over = check_game_over(&state, 2).unwrap();
        assert_eq!(over.reason, EndReason::NextPlayerStuck);
        assert_eq!(over.reveal, PlayerId::new(1));
    }

    #[test]
    fn test_reveal_falls_back_to_the_short_turn() {
        let mut state = known_game();
        close_all_piles(&mut state);
        state.advance_turn();

        let over = check_game_over(&state, 1).unwrap();
        assert_eq!(over.reason, EndReason::NextPlayerStuck);
        assert_eq!(over.reveal, PlayerId::new(0));
    }

    #[test]
    fn test_under_play_without_excuse_ends_the_match() {
        let mut state = known_game();
        state.advance_turn();

        // Seat 0 still holds all 7 cards and played just 1.
        let over = check_game_over(&state, 1).unwrap();
        assert_eq!(over.reason, EndReason::TooFewCardsPlayed);
        assert_eq!(over.reveal, PlayerId::new(0));
    }

    #[test]
    fn test_going_out_excuses_a_short_turn() {
        let mut state = known_game();
        let seat = PlayerId::new(0);

        // Leave seat 0 a single card, then have it go out.
        while state.player(seat).hand().len() > 1 {
            state.apply_play(seat, 0, PileId::new(0));
        }
        state.apply_play(seat, 0, PileId::new(0));
        state.advance_turn();

        // One play, empty hand: played == 0 + 1, so no verdict from the
        // under-play rule (and nobody is stuck on open piles).
        assert_eq!(check_game_over(&state, 1), None);
    }

    #[test]
    fn test_short_turn_with_cards_left_is_not_excused() {
        let mut state = known_game();
        let seat = PlayerId::new(0);

        // Seat 0 plays one card and keeps the rest.
        state.apply_play(seat, 0, PileId::new(0));
        state.advance_turn();

        let over = check_game_over(&state, 1).unwrap();
        assert_eq!(over.reason, EndReason::TooFewCardsPlayed);
    }

    #[test]
    fn test_empty_handed_pass_is_excused_after_turn_one() {
        let mut state = known_game();
        let seat = PlayerId::new(0);

        while !state.player(seat).hand().is_empty() {
            state.apply_play(seat, 0, PileId::new(0));
        }
        state.advance_turn();
        state.advance_turn();
        state.advance_turn();

        // Seat 0 just moved again (turns = 3), played nothing, holds
        // nothing: excused.
        assert_eq!(check_game_over(&state, 0), None);
    }

    #[test]
    fn test_empty_sets_counts_hands_and_spent_deck() {
        let mut state = known_game();
        assert_eq!(empty_sets(&state), 0);

        let seat = PlayerId::new(0);
        while !state.player(seat).hand().is_empty() {
            state.apply_play(seat, 0, PileId::new(0));
        }
        assert_eq!(empty_sets(&state), 1);

        // Drain the deck completely: 10 tail cards, dealt two at a time
        // into the now-empty hand and played straight back out.
        while state.deck().can_deal() {
            let got = state.refill_hand(seat, 2);
            for _ in 0..got {
                state.apply_play(seat, 0, PileId::new(0));
            }
        }
        assert!(state.deck().is_spent());
        assert_eq!(empty_sets(&state), 2);
    }

    #[test]
    fn test_all_sets_empty_wins() {
        let mut state = known_game();

        for seat in [PlayerId::new(0), PlayerId::new(1)] {
            while !state.player(seat).hand().is_empty() {
                state.apply_play(seat, 0, PileId::new(0));
            }
        }
        while state.deck().can_deal() {
            let got = state.refill_hand(PlayerId::new(0), 2);
            for _ in 0..got {
                state.apply_play(PlayerId::new(0), 0, PileId::new(0));
            }
        }
        state.advance_turn();

        // Seat 0 went out on its last turn: hand 0, played hand+1 keeps
        // the under-play rule quiet and the empty-set census fires.
        let over = check_game_over(&state, 1).unwrap();
        assert_eq!(over.reason, EndReason::AllSetsEmpty);
        assert_eq!(over.reveal, PlayerId::new(0));
    }
}
