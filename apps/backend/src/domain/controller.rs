//! Game controller: the only writer of `GameState`.
//!
//! Every operation takes the current snapshot by reference and returns the
//! next one, so a rejected intent can never leave a half-applied state.

use tracing::{debug, info};

use crate::domain::dealing::Dealer;
use crate::domain::intent::{Intent, MakeMove, StartGame};
use crate::domain::rules::{refill_size, target_row, OPENING_HAND};
use crate::domain::scoring::{winner_seat, Scorer};
use crate::domain::state::{next_player, GameState, Player, Street};
use crate::domain::turn_gate::{validate_move, validate_start, Admission};
use crate::errors::domain::{DomainError, ValidationKind};

pub struct GameController {
    dealer: Box<dyn Dealer>,
    scorer: Box<dyn Scorer>,
}

impl GameController {
    pub fn new(dealer: Box<dyn Dealer>, scorer: Box<dyn Scorer>) -> Self {
        Self { dealer, scorer }
    }

    /// Apply any intent against the current game (if one exists).
    pub fn apply(
        &mut self,
        current: Option<&GameState>,
        intent: &Intent,
    ) -> Result<GameState, DomainError> {
        match intent {
            Intent::StartGame(start) => self.start_game(current, start),
            Intent::MakeMove(mv) => {
                let Some(state) = current else {
                    return Err(DomainError::validation(
                        ValidationKind::NoGame,
                        "No game has been started",
                    ));
                };
                self.apply_move(state, mv)
            }
        }
    }

    /// Build a fresh game. Replaces `current` only if it has finished.
    pub fn start_game(
        &mut self,
        current: Option<&GameState>,
        start: &StartGame,
    ) -> Result<GameState, DomainError> {
        validate_start(current, start)?;

        self.dealer.reset();
        let mut players = Vec::with_capacity(start.player_names.len());
        for name in &start.player_names {
            let mut player = Player::new(name.clone());
            player.hand = self.dealer.deal(OPENING_HAND)?;
            players.push(player);
        }

        let state = GameState {
            players,
            current_player_index: 0,
            current_street: Street::first(),
            game_over: false,
            winner: None,
        };
        info!(
            players = state.players.len(),
            ai_agent = %start.ai_agent,
            "Game started"
        );
        debug_assert!(state.check_invariants().is_ok());
        Ok(state)
    }

    /// Move one card from the acting player's hand to their board.
    pub fn apply_move(
        &mut self,
        current: &GameState,
        mv: &MakeMove,
    ) -> Result<GameState, DomainError> {
        let Admission::Move {
            seat,
            card_index,
            row,
        } = validate_move(current, mv)?
        else {
            return Err(DomainError::validation_other(
                "Invariant violated: move validation admitted a non-move",
            ));
        };

        let mut next = current.clone();
        let player_count = next.players.len();
        {
            let player = &mut next.players[seat];
            let card = player.hand[card_index];
            player.board = player.board.place(row, card)?;
            player.hand.remove(card_index);

            if player.hand.is_empty() {
                let refill = refill_size(player.board.free_slots());
                if refill > 0 {
                    player.hand = self.dealer.deal(refill)?;
                }
            }
            debug!(
                seat,
                card = %card,
                row = row.as_str(),
                hand_left = player.hand.len(),
                "Card placed"
            );
        }

        next.current_player_index = next_player(seat, player_count);
        if next.current_player_index == 0 && street_complete(&next) {
            if let Some(street) = next.current_street.next() {
                debug!(from = %next.current_street, to = %street, "Street advanced");
                next.current_street = street;
            }
        }

        if next.all_boards_full() {
            self.finish(&mut next)?;
        }

        debug_assert!(next.check_invariants().is_ok());
        Ok(next)
    }

    fn finish(&self, state: &mut GameState) -> Result<(), DomainError> {
        let scores = self.scorer.score(&state.players);
        if scores.len() != state.players.len() {
            return Err(DomainError::collaborator(format!(
                "Scorer returned {} scores for {} players",
                scores.len(),
                state.players.len()
            )));
        }
        let winner = winner_seat(&scores)
            .and_then(|seat| state.players.get(seat))
            .map(|p| p.name.clone())
            .ok_or_else(|| DomainError::collaborator("No winner among scored players"))?;

        for (player, score) in state.players.iter_mut().zip(scores.iter()) {
            player.score = *score;
        }
        state.game_over = true;
        state.current_player_index = 0;
        state.winner = Some(winner);

        info!(
            winner = state.winner.as_deref().unwrap_or("-"),
            scores = ?scores,
            "Game ended"
        );
        Ok(())
    }
}

/// Every player has filled the row targeted by the current street.
fn street_complete(state: &GameState) -> bool {
    let row = target_row(state.current_street);
    state.players.iter().all(|p| p.board.is_row_full(row))
}
