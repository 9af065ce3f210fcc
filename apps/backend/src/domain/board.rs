//! Three-row open-face board.

use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// One of the three fixed-capacity rows of a board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Row {
    Front,
    Middle,
    Back,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Front, Row::Middle, Row::Back];

    pub const fn capacity(self) -> usize {
        match self {
            Row::Front => 3,
            Row::Middle => 5,
            Row::Back => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Row::Front => "front",
            Row::Middle => "middle",
            Row::Back => "back",
        }
    }
}

/// Total number of slots on a board.
pub const BOARD_SLOTS: usize =
    Row::Front.capacity() + Row::Middle.capacity() + Row::Back.capacity();

/// A player's board. Rows are append-only: there is no removal operation.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    front: Vec<Card>,
    middle: Vec<Card>,
    back: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, row: Row) -> &[Card] {
        match row {
            Row::Front => &self.front,
            Row::Middle => &self.middle,
            Row::Back => &self.back,
        }
    }

    pub fn remaining(&self, row: Row) -> usize {
        row.capacity().saturating_sub(self.row(row).len())
    }

    pub fn is_row_full(&self, row: Row) -> bool {
        self.remaining(row) == 0
    }

    pub fn free_slots(&self) -> usize {
        Row::ALL.iter().map(|&row| self.remaining(row)).sum()
    }

    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.middle.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().any(|c| c == card)
    }

    /// All placed cards, front to back.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.front
            .iter()
            .chain(self.middle.iter())
            .chain(self.back.iter())
            .copied()
    }

    /// Rows that still accept a card.
    pub fn free_rows(&self) -> Vec<Row> {
        Row::ALL
            .into_iter()
            .filter(|&row| !self.is_row_full(row))
            .collect()
    }

    /// Place `card` at the end of `row`, returning the new board.
    ///
    /// Capacity is checked before duplication, so a full row always reports
    /// `RowFull` even if the card is also a duplicate.
    pub fn place(&self, row: Row, card: Card) -> Result<Board, DomainError> {
        if self.is_row_full(row) {
            return Err(DomainError::validation(
                ValidationKind::RowFull,
                format!("{} row is full", row.as_str()),
            ));
        }
        if self.contains(card) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCard,
                format!("{card} is already on the board"),
            ));
        }

        let mut next = self.clone();
        match row {
            Row::Front => next.front.push(card),
            Row::Middle => next.middle.push(card),
            Row::Back => next.back.push(card),
        }
        Ok(next)
    }
}
