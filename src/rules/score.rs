//! Final scoring.

use crate::core::state::GameState;

/// Sum the cards the table failed to shed: everything left in the deck
/// plus everything left in every hand. Lower is better; zero is a perfect
/// win.
#[must_use]
pub fn final_score(state: &GameState) -> u32 {
    let in_hands: u32 = state
        .players()
        .map(|(_, player)| player.hand().len() as u32)
        .sum();
    state.deck().remaining() as u32 + in_hands
}
