//! Client intents: requests to change the game, subject to the turn gate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, PlayerId, Street};

/// Opaque AI policy identifier, forwarded to the move-provider registry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum AiAgent {
    #[default]
    #[serde(rename = "DQN")]
    Dqn,
    #[serde(rename = "A3C")]
    A3c,
    #[serde(rename = "PPO")]
    Ppo,
}

impl AiAgent {
    pub const fn as_str(self) -> &'static str {
        match self {
            AiAgent::Dqn => "DQN",
            AiAgent::A3c => "A3C",
            AiAgent::Ppo => "PPO",
        }
    }
}

impl fmt::Display for AiAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an intent names its acting player. The seat index is canonical;
/// a display name is accepted and resolved against the roster.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerRef {
    Index(i64),
    Name(String),
}

impl PlayerRef {
    pub fn resolve(&self, state: &GameState) -> Option<PlayerId> {
        match self {
            PlayerRef::Index(i) => usize::try_from(*i).ok(),
            PlayerRef::Name(name) => state.seat_of(name),
        }
    }
}

impl From<PlayerId> for PlayerRef {
    fn from(seat: PlayerId) -> Self {
        // Seats are bounded by MAX_PLAYERS, far below i64::MAX.
        PlayerRef::Index(seat as i64)
    }
}

fn default_player_names() -> Vec<String> {
    vec!["Player 1".to_string(), "AI".to_string()]
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StartGame {
    #[serde(default = "default_player_names")]
    pub player_names: Vec<String>,
    #[serde(default)]
    pub ai_agent: AiAgent,
    /// Seats driven by the AI provider. When absent, seats named `AI` are.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_players: Option<Vec<PlayerId>>,
}

impl StartGame {
    pub fn new(player_names: Vec<String>, ai_agent: AiAgent) -> Self {
        Self {
            player_names,
            ai_agent,
            ai_players: None,
        }
    }

    /// Seats the AI provider plays for.
    pub fn ai_seats(&self) -> Vec<PlayerId> {
        match &self.ai_players {
            Some(seats) => {
                let mut seats: Vec<PlayerId> = seats
                    .iter()
                    .copied()
                    .filter(|&s| s < self.player_names.len())
                    .collect();
                seats.sort_unstable();
                seats.dedup();
                seats
            }
            None => self
                .player_names
                .iter()
                .enumerate()
                .filter(|(_, name)| name.as_str() == "AI")
                .map(|(seat, _)| seat)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MakeMove {
    pub player_index: PlayerRef,
    pub card_index: i64,
    pub street: Street,
}

impl MakeMove {
    pub fn new(seat: PlayerId, card_index: usize, street: Street) -> Self {
        Self {
            player_index: seat.into(),
            // Hand indices are tiny; the cast cannot wrap.
            card_index: card_index as i64,
            street,
        }
    }
}

/// A placement for whoever is to act: this hand card on this street.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MoveChoice {
    pub card_index: usize,
    pub street: Street,
}

impl MoveChoice {
    /// Turn the choice into a wire-level intent for `seat`.
    pub fn into_intent(self, seat: PlayerId) -> MakeMove {
        MakeMove::new(seat, self.card_index, self.street)
    }
}

/// Tagged client intent; an unrecognized `action` fails to parse.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    StartGame(StartGame),
    MakeMove(MakeMove),
}
