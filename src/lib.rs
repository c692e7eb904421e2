//! # cardclimb
//!
//! Rules engine for a cooperative card-climbing game: one shared 98-card
//! deck (`2..=99`) feeds four directional piles (two ascending from 1,
//! two descending from 100) and 1-5 players cooperate to shed every card.
//! A card lands on a pile if it continues the pile's direction, or sits
//! exactly 10 away from the top (the "reverser" exception, which walks a
//! pile backwards).
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no console, no prompts, no rendering. Human input
//!    arrives through the [`players::HumanInput`] provider contract;
//!    display leaves through the observational [`render::Renderer`] seam.
//!
//! 2. **Explicit randomness**: one seeded [`core::GameRng`] per match,
//!    forked for each AI selector. Same seed, same decisions, same game.
//!
//! 3. **Policy outcomes over errors**: a dead board, an exhausted deck, or
//!    a cancelled choice are ordinary states the turn machine branches on.
//!    Only caller contract violations (a bad seat count, an out-of-range
//!    index) fail loudly.
//!
//! ## Modules
//!
//! - `core`: cards, players, the seeded RNG, `GameState` and its builder
//! - `zones`: the draw deck, the four piles, hands
//! - `players`: the `MoveSelector` capability interface, with the AI
//!   heuristic and the human bridge behind it
//! - `rules`: the per-turn state machine, end detection, scoring
//! - `render`: the observational renderer trait
//!
//! ## Driving a match
//!
//! ```
//! use cardclimb::core::{GameBuilder, GameRng};
//! use cardclimb::players::AiSelector;
//! use cardclimb::rules::{check_game_over, final_score, take_turn};
//!
//! let mut rng = GameRng::new(42);
//! let mut state = GameBuilder::new().ai("Crow").ai("Rook").build(&mut rng);
//! let mut selectors = vec![
//!     AiSelector::new(rng.fork()),
//!     AiSelector::new(rng.fork()),
//! ];
//!
//! let game_over = loop {
//!     let seat = state.active_seat();
//!     let summary = take_turn(&mut state, &mut selectors[seat.index()], &mut ());
//!     if let Some(game_over) = check_game_over(&state, summary.cards_played) {
//!         break game_over;
//!     }
//! };
//!
//! println!("{:?}: scored {}", game_over.reason, final_score(&state));
//! ```

pub mod core;
pub mod players;
pub mod render;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, GameBuilder, GameRng, GameState, PlayRecord, Player, PlayerId, PlayerKind,
};

pub use crate::zones::{DrawDeck, Hand, PileDirection, PileId, PlayPile, Piles};

pub use crate::players::{AiSelector, HumanInput, HumanSelector, MoveSelector, TurnAction};

pub use crate::rules::{
    check_game_over, final_score, take_turn, EndReason, GameOver, TurnStatus, TurnSummary,
};

pub use crate::render::Renderer;
