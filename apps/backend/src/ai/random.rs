//! Random AI player: places a uniformly chosen hand card.

use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::trait_def::{legal_choices, AiError, MoveProvider};
use crate::domain::MoveChoice;
use crate::domain::{GameState, PlayerId};

/// Baseline provider. Seedable so AI games can be replayed in tests.
pub struct RandomPlayer {
    /// `propose_move` takes `&self`; the RNG needs a lock.
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl MoveProvider for RandomPlayer {
    fn propose_move(&self, state: &GameState, seat: PlayerId) -> Result<MoveChoice, AiError> {
        let moves = legal_choices(state, seat)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(moves[rng.random_range(0..moves.len())])
    }
}
