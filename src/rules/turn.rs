//! The per-turn state machine.
//!
//! One call to [`take_turn`] runs the active seat's whole turn: repeated
//! selector consultations, play application, the end-of-turn draw-back,
//! and the completed-turn increment. Control moves through three states:
//!
//! - [`TurnStatus::Continue`]: re-evaluate whether more plays are
//!   expected;
//! - [`TurnStatus::AwaitingChoice`]: consult the seat's selector (for a
//!   human seat this is where the engine suspends on input);
//! - [`TurnStatus::Complete`]: stop looping, settle the draw-back.
//!
//! The loop expects more plays while a valid play exists and the seat has
//! not signaled an end, and additionally, for a human who has already met
//! the two-play minimum, for as long as they care to keep going. An AI
//! seat is capped at exactly two plays per turn and never stops earlier on
//! its own.
//!
//! Trust is asymmetric: AI selectors only propose legal moves and their
//! plays are applied directly, while every human-originated move is
//! validated here and an invalid one simply re-enters `AwaitingChoice`
//! without counting.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerKind};
use crate::core::state::GameState;
use crate::players::{MoveSelector, TurnAction};
use crate::render::Renderer;

/// Plays a seat must make before it may voluntarily end its turn.
pub const MIN_PLAYS_PER_TURN: u32 = 2;

/// Hard cap on plays an AI seat makes in one turn.
pub const AI_PLAYS_PER_TURN: u32 = 2;

/// Where the turn machine stands between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// More plays may be expected; re-evaluate the loop condition.
    Continue,
    /// The seat's selector must be consulted.
    AwaitingChoice,
    /// The turn is over.
    Complete,
}

/// What one completed turn did.
///
/// `cards_played` is the signal the end-condition evaluator consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// The seat that moved.
    pub seat: PlayerId,
    /// Plays applied this turn.
    pub cards_played: u32,
    /// Cards drawn back at the end of the turn.
    pub cards_drawn: u32,
}

/// Run the active seat's turn to completion and rotate to the next seat.
///
/// The renderer is notified after every applied play; a human seat is also
/// shown its own hand between plays.
pub fn take_turn(
    state: &mut GameState,
    selector: &mut dyn MoveSelector,
    renderer: &mut dyn Renderer,
) -> TurnSummary {
    let seat = state.active_seat();
    let kind = state.player(seat).kind();
    let mut plays = 0u32;
    let mut ended = false;
    let mut status = TurnStatus::Continue;

    loop {
        status = match status {
            TurnStatus::Continue => {
                let wants_more = (state.has_valid_play(seat) && !ended)
                    || (kind == PlayerKind::Human && plays >= MIN_PLAYS_PER_TURN);
                if !wants_more {
                    TurnStatus::Complete
                } else if kind == PlayerKind::Ai && plays == AI_PLAYS_PER_TURN {
                    TurnStatus::Complete
                } else {
                    TurnStatus::AwaitingChoice
                }
            }
            TurnStatus::AwaitingChoice => match selector.select(state, seat, plays) {
                TurnAction::EndTurn => {
                    ended = true;
                    TurnStatus::Complete
                }
                TurnAction::Play { card_index, pile } => {
                    if kind == PlayerKind::Human && !state.is_valid_play(seat, card_index, pile) {
                        TurnStatus::AwaitingChoice
                    } else {
                        state.apply_play(seat, card_index, pile);
                        plays += 1;
                        renderer.table_changed(state.deck(), state.piles());
                        if kind == PlayerKind::Human {
                            renderer.hand_shown(seat, state.player(seat));
                        }
                        TurnStatus::Continue
                    }
                }
            },
            TurnStatus::Complete => break,
        };
    }

    // A human only draws back after choosing to stop with the minimum met;
    // an AI always draws back whatever it managed to play.
    let cards_drawn = if (ended && plays >= MIN_PLAYS_PER_TURN) || kind == PlayerKind::Ai {
        state.refill_hand(seat, plays as usize) as u32
    } else {
        0
    };

    state.advance_turn();

    TurnSummary {
        seat,
        cards_played: plays,
        cards_drawn,
    }
}
