//! Test-only game state helpers for domain unit tests.

use crate::domain::controller::GameController;
use crate::domain::dealing::ShuffledDeck;
use crate::domain::intent::{AiAgent, MakeMove, StartGame};
use crate::domain::scoring::RowComparisonScorer;
use crate::domain::state::{GameState, PlayerId, Street};

/// Controller over a seeded deck and the default scorer.
pub fn seeded_controller(seed: u64) -> GameController {
    GameController::new(
        Box::new(ShuffledDeck::new(Some(seed))),
        Box::new(RowComparisonScorer),
    )
}

pub fn start_request(names: &[&str]) -> StartGame {
    StartGame::new(names.iter().map(|n| n.to_string()).collect(), AiAgent::Dqn)
}

/// Start a game for `names` with a seeded deck.
pub fn started(names: &[&str], seed: u64) -> (GameController, GameState) {
    let mut controller = seeded_controller(seed);
    let state = controller
        .start_game(None, &start_request(names))
        .expect("start_game should succeed for a valid roster");
    (controller, state)
}

pub fn mv(seat: PlayerId, card_index: usize, street: Street) -> MakeMove {
    MakeMove::new(seat, card_index, street)
}

/// The legal move that places the first hand card of whoever is to act.
pub fn next_legal_move(state: &GameState) -> MakeMove {
    mv(state.current_player_index, 0, state.current_street)
}

/// Drive a game to completion, returning every intermediate snapshot.
pub fn play_out(controller: &mut GameController, state: GameState) -> Vec<GameState> {
    let mut history = vec![state];
    loop {
        let Some(last) = history.last() else {
            unreachable!("history starts non-empty");
        };
        if last.game_over {
            return history;
        }
        let next = controller
            .apply_move(last, &next_legal_move(last))
            .expect("first hand card is always legal for the current player");
        history.push(next);
    }
}
