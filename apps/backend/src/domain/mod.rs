//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod controller;
pub mod dealing;
pub mod intent;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod turn_gate;

#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_controller;
#[cfg(test)]
mod tests_turn_gate;

// Re-exports for ergonomics
pub use board::{Board, Row};
pub use cards_types::{Card, Rank, Suit};
pub use controller::GameController;
pub use dealing::{Dealer, ShuffledDeck, StackedDeck};
pub use intent::{AiAgent, Intent, MakeMove, MoveChoice, PlayerRef, StartGame};
pub use scoring::{RowComparisonScorer, Scorer};
pub use state::{GameState, Player, PlayerId, Street};
pub use turn_gate::{legal_moves, validate, Admission};
