//! Bridging human input providers into the selector interface.
//!
//! The crate never prompts, validates raw text, or blocks on a console;
//! all of that lives behind [`HumanInput`], implemented outside the engine.
//! The provider owns range checking and the end-turn permission rule
//! (ending requires two plays unless the hand is empty); the engine
//! re-checks only structural bounds and play validity.

use crate::core::card::Card;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::hand::Hand;
use crate::zones::pile::{PileId, Piles};

use super::{MoveSelector, TurnAction};

/// External provider of a human's choices.
pub trait HumanInput {
    /// Pick a card from `hand` to play, or `None` to end the turn.
    ///
    /// The provider validates the index range and only offers the
    /// end-turn option once `plays_made` reaches two or the hand is
    /// empty. An empty hand leaves `None` as the only possible answer.
    fn choose_card(&mut self, hand: &Hand, plays_made: u32) -> Option<usize>;

    /// Pick the pile to place `card` on, or `None` to cancel back to the
    /// card choice.
    fn choose_pile(&mut self, card: Card, piles: &Piles) -> Option<PileId>;
}

/// Selector for a human seat, wrapping a [`HumanInput`] provider.
///
/// Pile-choice cancellation loops back to a fresh card choice in here, so
/// the turn machine only ever sees a play or an end-turn signal.
#[derive(Clone, Debug)]
pub struct HumanSelector<I> {
    input: I,
}

impl<I> HumanSelector<I> {
    /// Wrap a provider.
    #[must_use]
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: HumanInput> MoveSelector for HumanSelector<I> {
    fn select(&mut self, state: &GameState, seat: PlayerId, plays_made: u32) -> TurnAction {
        let hand = state.player(seat).hand();
        loop {
            let Some(card_index) = self.input.choose_card(hand, plays_made) else {
                return TurnAction::EndTurn;
            };
            let card = hand.get(card_index);
            if let Some(pile) = self.input.choose_pile(card, state.piles()) {
                return TurnAction::Play { card_index, pile };
            }
            // Cancelled: back to the card choice, nothing played.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerKind;
    use crate::core::rng::GameRng;
    use crate::core::state::GameBuilder;

    /// Provider that replays a fixed script of answers.
    struct Script {
        cards: Vec<Option<usize>>,
        piles: Vec<Option<PileId>>,
    }

    impl HumanInput for Script {
        fn choose_card(&mut self, _hand: &Hand, _plays_made: u32) -> Option<usize> {
            self.cards.remove(0)
        }

        fn choose_pile(&mut self, _card: Card, _piles: &Piles) -> Option<PileId> {
            self.piles.remove(0)
        }
    }

    fn human_game() -> GameState {
        let mut rng = GameRng::new(42);
        GameBuilder::new()
            .seat("Ada", PlayerKind::Human)
            .ai("Crow")
            .build(&mut rng)
    }

    #[test]
    fn test_card_then_pile_becomes_a_play() {
        let state = human_game();
        let mut selector = HumanSelector::new(Script {
            cards: vec![Some(3)],
            piles: vec![Some(PileId::new(1))],
        });

        let action = selector.select(&state, PlayerId::new(0), 0);
        assert_eq!(
            action,
            TurnAction::Play {
                card_index: 3,
                pile: PileId::new(1)
            }
        );
    }

    #[test]
    fn test_end_turn_signal_passes_through() {
        let state = human_game();
        let mut selector = HumanSelector::new(Script {
            cards: vec![None],
            piles: vec![],
        });

        let action = selector.select(&state, PlayerId::new(0), 2);
        assert_eq!(action, TurnAction::EndTurn);
    }

    #[test]
    fn test_cancel_reprompts_for_a_card() {
        let state = human_game();
        let mut selector = HumanSelector::new(Script {
            cards: vec![Some(0), Some(5)],
            piles: vec![None, Some(PileId::new(2))],
        });

        let action = selector.select(&state, PlayerId::new(0), 0);
        assert_eq!(
            action,
            TurnAction::Play {
                card_index: 5,
                pile: PileId::new(2)
            }
        );
    }
}
