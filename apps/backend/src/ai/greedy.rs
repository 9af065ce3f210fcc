//! Greedy placer: ranks each hand card against the row it would join.
//!
//! Front is played cheaply (weakest resulting row) so the back and middle,
//! which are played strongest-first, stay ahead of it.

use super::trait_def::{legal_choices, AiError, MoveProvider};
use crate::domain::MoveChoice;
use crate::domain::rules::target_row;
use crate::domain::scoring::{evaluate, HandValue};
use crate::domain::{GameState, PlayerId, Row};

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlacer;

impl GreedyPlacer {
    pub const NAME: &'static str = "GreedyPlacer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(_seed: Option<u64>) -> Self {
        Self
    }
}

impl MoveProvider for GreedyPlacer {
    fn propose_move(&self, state: &GameState, seat: PlayerId) -> Result<MoveChoice, AiError> {
        let moves = legal_choices(state, seat)?;
        let player = state
            .player(seat)
            .ok_or_else(|| AiError::Internal(format!("seat {seat} missing")))?;
        let row = target_row(state.current_street);
        let placed = player.board.row(row);

        // (row value after placing, card rank, hand index)
        let candidates = moves.iter().filter_map(|choice| {
            let card = player.hand.get(choice.card_index)?;
            let mut cards = placed.to_vec();
            cards.push(*card);
            Some((evaluate(&cards), card.rank.value(), choice.card_index))
        });
        let best = match row {
            Row::Front => candidates.min_by(|a, b| cmp_key(a, b)),
            Row::Middle | Row::Back => candidates.max_by(|a, b| cmp_key(a, b).then(b.2.cmp(&a.2))),
        };

        let (_, _, card_index) = best.ok_or(AiError::EmptyHand(seat))?;
        Ok(MoveChoice {
            card_index,
            street: state.current_street,
        })
    }
}

fn cmp_key(a: &(HandValue, u8, usize), b: &(HandValue, u8, usize)) -> std::cmp::Ordering {
    a.0.cmp(&b.0).then(a.1.cmp(&b.1))
}
