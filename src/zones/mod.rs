//! Card containers: the shared draw deck, the four play piles, and hands.

pub mod deck;
pub mod hand;
pub mod pile;

pub use deck::DrawDeck;
pub use hand::Hand;
pub use pile::{PileDirection, PileId, PlayPile, Piles};
