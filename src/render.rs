//! The observational renderer seam.
//!
//! Display lives entirely outside this crate. The engine announces what
//! changed through this trait and never waits on, or is influenced by, the
//! result; implementations read state and draw, nothing more. Every method
//! defaults to a no-op, and the unit type is the silent renderer for
//! drivers and tests that do not display anything.

use crate::core::player::{Player, PlayerId};
use crate::core::state::GameState;
use crate::rules::end::GameOver;
use crate::zones::deck::DrawDeck;
use crate::zones::pile::Piles;

/// Sink for display notifications.
pub trait Renderer {
    /// The deck or a pile changed (announced after every applied play).
    fn table_changed(&mut self, _deck: &DrawDeck, _piles: &Piles) {}

    /// A seat's hand should be shown (the active human between plays, or
    /// the revealed hand at match end).
    fn hand_shown(&mut self, _seat: PlayerId, _player: &Player) {}

    /// The match ended; `game_over.reveal` names the hand to show.
    fn game_ended(&mut self, _game_over: &GameOver, _state: &GameState) {}
}

/// The silent renderer.
impl Renderer for () {}
