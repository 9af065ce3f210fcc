//! Turn gate: classifies an intent as admitted or rejected.
//!
//! Pure and deterministic. Mutation belongs to the controller, which only
//! ever applies what this module admits.

use std::collections::HashSet;

use crate::domain::board::Row;
use crate::domain::intent::{Intent, MakeMove, MoveChoice, PlayerRef, StartGame};
use crate::domain::rules::{target_row, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{GameState, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// A validated intent, with references resolved against the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    StartGame,
    Move {
        seat: PlayerId,
        card_index: usize,
        row: Row,
    },
}

/// Validate `intent` against the current game, if any.
pub fn validate(state: Option<&GameState>, intent: &Intent) -> Result<Admission, DomainError> {
    match intent {
        Intent::StartGame(start) => validate_start(state, start),
        Intent::MakeMove(mv) => {
            let Some(state) = state else {
                return Err(DomainError::validation(
                    ValidationKind::NoGame,
                    "No game has been started",
                ));
            };
            validate_move(state, mv)
        }
    }
}

/// A new game may replace a finished one but never a running one.
pub fn validate_start(
    state: Option<&GameState>,
    start: &StartGame,
) -> Result<Admission, DomainError> {
    if let Some(state) = state {
        if !state.game_over {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyInProgress,
                "A game is already in progress",
            ));
        }
    }

    let count = start.player_names.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoster,
            format!("Expected {MIN_PLAYERS}..={MAX_PLAYERS} players, got {count}"),
        ));
    }
    let mut seen = HashSet::with_capacity(count);
    for name in &start.player_names {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoster,
                "Player names must not be blank",
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoster,
                format!("Duplicate player name: {name}"),
            ));
        }
    }

    Ok(Admission::StartGame)
}

fn not_your_turn(actor: &dyn std::fmt::Display, state: &GameState) -> DomainError {
    DomainError::validation(
        ValidationKind::NotYourTurn,
        format!(
            "Seat {actor} acted but seat {} is to play",
            state.current_player_index
        ),
    )
}

/// Rules in order; the first failing rule wins.
pub fn validate_move(state: &GameState, mv: &MakeMove) -> Result<Admission, DomainError> {
    // 1. Finished games admit nothing.
    if state.game_over {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "The game is over",
        ));
    }

    // 2. Only the current player may act. Any index other than the current
    // seat, negative or past the roster included, is out of turn.
    let seat = match (&mv.player_index, mv.player_index.resolve(state)) {
        (_, Some(seat)) => seat,
        (PlayerRef::Index(index), None) => return Err(not_your_turn(index, state)),
        (PlayerRef::Name(name), None) => {
            return Err(DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("Unknown player: {name}"),
            ))
        }
    };
    if seat != state.current_player_index {
        return Err(not_your_turn(&seat, state));
    }

    // 3. Late intents from an earlier street are stale.
    if mv.street != state.current_street {
        return Err(DomainError::validation(
            ValidationKind::StaleStreet,
            format!(
                "Intent for street {} but street {} is active",
                mv.street, state.current_street
            ),
        ));
    }

    let Some(player) = state.player(seat) else {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: current seat {seat} has no player"
        )));
    };

    // 4. The card must be in hand.
    let card_index = usize::try_from(mv.card_index)
        .ok()
        .filter(|&i| i < player.hand.len())
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidCardIndex,
                format!(
                    "Card index {} outside hand of {} cards",
                    mv.card_index,
                    player.hand.len()
                ),
            )
        })?;

    // 5. The target row must have room.
    let row = target_row(state.current_street);
    if player.board.is_row_full(row) {
        return Err(DomainError::validation(
            ValidationKind::RowFull,
            format!("{} row is full", row.as_str()),
        ));
    }

    Ok(Admission::Move {
        seat,
        card_index,
        row,
    })
}

/// Every placement `seat` may make right now, in hand order.
///
/// Empty when the game is over, another seat is to act, or the target row
/// has no room. Each entry passes `validate_move` for `seat`.
pub fn legal_moves(state: &GameState, seat: PlayerId) -> Vec<MoveChoice> {
    if state.game_over || seat != state.current_player_index {
        return Vec::new();
    }
    let Some(player) = state.player(seat) else {
        return Vec::new();
    };
    if player.board.is_row_full(target_row(state.current_street)) {
        return Vec::new();
    }
    (0..player.hand.len())
        .map(|card_index| MoveChoice {
            card_index,
            street: state.current_street,
        })
        .collect()
}
