use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::board::Board;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Seat index into `GameState::players`; the canonical player identifier.
pub type PlayerId = usize;

/// Stage of the game; each street fills the row of the same name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Street {
    Front,
    Middle,
    Back,
}

impl Street {
    pub const ALL: [Street; 3] = [Street::Front, Street::Middle, Street::Back];

    pub const fn first() -> Self {
        Street::Front
    }

    pub const fn next(self) -> Option<Street> {
        match self {
            Street::Front => Some(Street::Middle),
            Street::Middle => Some(Street::Back),
            Street::Back => None,
        }
    }

    /// Wire number (1-based), accepted as an alias of the name on input.
    pub const fn number(self) -> u8 {
        match self {
            Street::Front => 1,
            Street::Middle => 2,
            Street::Back => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Street::Front => "FRONT",
            Street::Middle => "MIDDLE",
            Street::Back => "BACK",
        }
    }

    pub fn from_number(n: u64) -> Option<Street> {
        Street::ALL.into_iter().find(|s| u64::from(s.number()) == n)
    }

    pub fn from_name(name: &str) -> Option<Street> {
        Street::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Street {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Street {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StreetRepr {
            Name(String),
            Number(u64),
        }

        match StreetRepr::deserialize(deserializer)? {
            StreetRepr::Name(name) => Street::from_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid street: {name}"))),
            StreetRepr::Number(n) => Street::from_number(n)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid street: {n}"))),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Cards still available to place.
    pub hand: Vec<Card>,
    pub board: Board,
    /// Filled in by the scorer once the game is over.
    pub score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            board: Board::new(),
            score: 0,
        }
    }
}

/// The canonical snapshot, broadcast whole after every accepted change.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: PlayerId,
    pub current_street: Street,
    pub game_over: bool,
    pub winner: Option<String>,
}

impl GameState {
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn seat_of(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn all_boards_full(&self) -> bool {
        self.players.iter().all(|p| p.board.is_full())
    }

    /// Check the invariants every broadcast snapshot must satisfy.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.players.is_empty() {
            return Err(DomainError::validation_other(
                "Invariant violated: a game has at least one player",
            ));
        }
        if !self.game_over && self.current_player_index >= self.players.len() {
            return Err(DomainError::validation_other(format!(
                "Invariant violated: current_player_index {} out of range",
                self.current_player_index
            )));
        }
        if self.game_over != self.winner.is_some() {
            return Err(DomainError::validation_other(
                "Invariant violated: winner must be present iff game_over",
            ));
        }

        let mut names = HashSet::new();
        for player in &self.players {
            if !names.insert(player.name.as_str()) {
                return Err(DomainError::validation_other(format!(
                    "Invariant violated: duplicate player name {}",
                    player.name
                )));
            }
            let mut seen = HashSet::new();
            for card in player.hand.iter().copied().chain(player.board.cards()) {
                if !seen.insert(card) {
                    return Err(DomainError::validation_other(format!(
                        "Invariant violated: {card} held twice by {}",
                        player.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Seat that acts after `seat` in a game of `players` seats.
#[inline]
pub fn next_player(seat: PlayerId, players: usize) -> PlayerId {
    debug_assert!(players > 0, "next_player needs at least one seat");
    (seat + 1) % players
}
