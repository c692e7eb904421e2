//! Core engine types: cards, players, state, RNG.
//!
//! These are the building blocks every other module sits on. Nothing in
//! here drives play; the turn machine and selectors do that on top.

pub mod card;
pub mod player;
pub mod rng;
pub mod state;

pub use card::Card;
pub use player::{hand_size_for, Player, PlayerId, PlayerKind, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
pub use state::{GameBuilder, GameState, PlayRecord};
