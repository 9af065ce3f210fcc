//! Error codes for the OFC table server.
//!
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that appears
//! in rejection frames and HTTP problem responses. Add new codes here; never
//! pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn gate
    /// Intent came from a seat other than the current player
    NotYourTurn,
    /// Intent targets a street other than the active one
    StaleStreet,
    /// Card index outside the acting player's hand
    InvalidCardIndex,
    /// Target row is at capacity
    RowFull,
    /// Card already present on the board
    DuplicateCard,
    /// Game already finished
    GameOver,
    /// A game is running and has not finished
    GameAlreadyInProgress,
    /// Player roster for a new game is unusable
    InvalidRoster,
    /// No game has been started
    NoGame,
    /// Player reference does not resolve to a seat
    UnknownPlayer,

    // Request validation
    /// Card token could not be parsed
    ParseCard,
    /// General bad request error
    BadRequest,

    // System errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// AI provider failed to produce a move
    AiFailure,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::StaleStreet => "STALE_STREET",
            Self::InvalidCardIndex => "INVALID_CARD_INDEX",
            Self::RowFull => "ROW_FULL",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::GameOver => "GAME_OVER",
            Self::GameAlreadyInProgress => "GAME_ALREADY_IN_PROGRESS",
            Self::InvalidRoster => "INVALID_ROSTER",
            Self::NoGame => "NO_GAME",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",

            Self::ParseCard => "PARSE_CARD",
            Self::BadRequest => "BAD_REQUEST",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::AiFailure => "AI_FAILURE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
