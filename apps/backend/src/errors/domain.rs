//! Domain-level error type used by the card model, the turn gate and the
//! controller.
//!
//! This error type is transport-agnostic. The table converts a rejection into
//! an optional `{"error", "detail"}` frame; the HTTP layer converts it into
//! `crate::error::AppError` via `From<DomainError>`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Why an intent or a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NotYourTurn,
    StaleStreet,
    InvalidCardIndex,
    RowFull,
    DuplicateCard,
    GameOver,
    GameAlreadyInProgress,
    InvalidRoster,
    NoGame,
    UnknownPlayer,
    ParseCard,
    Other(String),
}

impl ValidationKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
            ValidationKind::StaleStreet => ErrorCode::StaleStreet,
            ValidationKind::InvalidCardIndex => ErrorCode::InvalidCardIndex,
            ValidationKind::RowFull => ErrorCode::RowFull,
            ValidationKind::DuplicateCard => ErrorCode::DuplicateCard,
            ValidationKind::GameOver => ErrorCode::GameOver,
            ValidationKind::GameAlreadyInProgress => ErrorCode::GameAlreadyInProgress,
            ValidationKind::InvalidRoster => ErrorCode::InvalidRoster,
            ValidationKind::NoGame => ErrorCode::NoGame,
            ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
            ValidationKind::ParseCard => ErrorCode::ParseCard,
            ValidationKind::Other(_) => ErrorCode::BadRequest,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rule violation; the state was left untouched
    Validation(ValidationKind, String),
    /// Collaborator failure (deck exhausted, scorer mismatch)
    Collaborator(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Collaborator(d) => write!(f, "collaborator error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn collaborator(detail: impl Into<String>) -> Self {
        Self::Collaborator(detail.into())
    }

    /// The validation kind, if this is a rule violation.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Collaborator(_) => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => kind.code(),
            DomainError::Collaborator(_) => ErrorCode::Internal,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Collaborator(d) => d,
        }
    }
}
