//! Move provider trait definition.

use std::fmt;

use crate::domain::{legal_moves, GameState, MoveChoice, PlayerId};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Errors that can occur while an AI seat picks a card.
#[derive(Debug)]
pub enum AiError {
    /// Asked to move for a seat that is not to act.
    NotOnTurn(PlayerId),
    /// The seat has nothing to place.
    EmptyHand(PlayerId),
    /// Provider encountered an internal error
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NotOnTurn(seat) => write!(f, "AI asked to move for seat {seat} out of turn"),
            AiError::EmptyHand(seat) => write!(f, "AI seat {seat} has an empty hand"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(ErrorCode::AiFailure, format!("AI error: {err}"))
    }
}

/// Capability interface for AI-controlled seats.
///
/// Providers see the full snapshot and return a choice; the table feeds it
/// back through the turn gate like any human intent, so a provider can never
/// bypass the rules.
pub trait MoveProvider: Send + Sync {
    fn propose_move(&self, state: &GameState, seat: PlayerId) -> Result<MoveChoice, AiError>;
}

/// Shared precondition: `seat` is to act in a live game and has a legal
/// placement. Returns the placements a provider may choose from.
pub(crate) fn legal_choices(
    state: &GameState,
    seat: PlayerId,
) -> Result<Vec<MoveChoice>, AiError> {
    if state.game_over || state.current_player_index != seat {
        return Err(AiError::NotOnTurn(seat));
    }
    let hand = state
        .player(seat)
        .map(|p| p.hand.len())
        .ok_or(AiError::NotOnTurn(seat))?;
    if hand == 0 {
        return Err(AiError::EmptyHand(seat));
    }
    let moves = legal_moves(state, seat);
    if moves.is_empty() {
        return Err(AiError::Internal(format!(
            "seat {seat} holds cards but has no legal placement"
        )));
    }
    Ok(moves)
}
