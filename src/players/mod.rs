//! Per-seat decision making.
//!
//! Every seat decides its moves through the [`MoveSelector`] capability
//! interface, with one implementation per player variant: [`AiSelector`]
//! runs the in-crate heuristic, [`HumanSelector`] bridges an external
//! [`HumanInput`] provider. The turn machine consults whichever selector
//! the driver supplies for the active seat and never branches on the
//! player kind to *make* a decision, only to decide how much to trust it.

pub mod ai;
pub mod human;

pub use ai::AiSelector;
pub use human::{HumanInput, HumanSelector};

use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::pile::PileId;

/// A decision produced by a seat's selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Play the hand card at `card_index` onto `pile`.
    Play { card_index: usize, pile: PileId },
    /// Stop playing for this turn.
    EndTurn,
}

/// Decision capability for one seat.
///
/// Called once per desired play while the turn machine's loop condition
/// holds. `plays_made` counts the plays already applied this turn, which
/// human providers need for the end-turn permission rule.
pub trait MoveSelector {
    fn select(&mut self, state: &GameState, seat: PlayerId, plays_made: u32) -> TurnAction;
}
