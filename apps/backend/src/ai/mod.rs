//! AI move providers for AI-controlled seats.

mod greedy;
mod random;
pub mod registry;
mod trait_def;

pub use greedy::GreedyPlacer;
pub use random::RandomPlayer;
pub use registry::{by_agent, provider_for, registered_ais, AiFactory};
pub use crate::domain::MoveChoice;
pub use trait_def::{AiError, MoveProvider};
