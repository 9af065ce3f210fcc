// Controller tests: game start, move application, street flow and game end.

use std::collections::HashSet;

use crate::domain::board::Row;
use crate::domain::controller::GameController;
use crate::domain::dealing::{full_deck, StackedDeck};
use crate::domain::intent::{Intent, MakeMove};
use crate::domain::rules::OPENING_HAND;
use crate::domain::scoring::{RowComparisonScorer, Scorer};
use crate::domain::state::{Player, Street};
use crate::domain::test_state_helpers::{mv, play_out, start_request, started};
use crate::domain::Card;
use crate::errors::domain::ValidationKind;

/// Scores every player the same.
struct FlatScorer;

impl Scorer for FlatScorer {
    fn score(&self, players: &[Player]) -> Vec<i32> {
        vec![7; players.len()]
    }
}

/// Always drops the last player's score.
struct ShortScorer;

impl Scorer for ShortScorer {
    fn score(&self, players: &[Player]) -> Vec<i32> {
        vec![0; players.len().saturating_sub(1)]
    }
}

fn stacked_controller(scorer: Box<dyn Scorer>) -> GameController {
    GameController::new(Box::new(StackedDeck::new(full_deck())), scorer)
}

#[test]
fn start_game_deals_opening_hands_to_empty_boards() {
    let (_, state) = started(&["Alice", "Bob"], 11);

    assert_eq!(state.current_player_index, 0);
    assert_eq!(state.current_street, Street::Front);
    assert!(!state.game_over);
    assert!(state.winner.is_none());
    assert_eq!(state.players.len(), 2);
    for player in &state.players {
        assert!(player.board.is_empty());
        assert_eq!(player.hand.len(), OPENING_HAND);
        assert_eq!(player.score, 0);
    }
    let all: HashSet<Card> = state
        .players
        .iter()
        .flat_map(|p| p.hand.iter().copied())
        .collect();
    assert_eq!(all.len(), 2 * OPENING_HAND, "hands never share a card");
}

#[test]
fn move_places_chosen_card_and_passes_turn() {
    let (mut ctl, state) = started(&["Alice", "Bob"], 11);
    let chosen = state.players[0].hand[2];

    let next = ctl.apply_move(&state, &mv(0, 2, Street::Front)).unwrap();

    let alice = &next.players[0];
    assert_eq!(alice.board.row(Row::Front), &[chosen]);
    assert!(!alice.hand.contains(&chosen));
    assert_eq!(alice.hand.len(), OPENING_HAND - 1);
    assert_eq!(next.current_player_index, 1);
    assert_eq!(next.current_street, Street::Front);
    assert_eq!(next.players[1], state.players[1]);
}

#[test]
fn rejected_move_leaves_state_unchanged() {
    let (mut ctl, state) = started(&["Alice", "Bob"], 11);
    let before = state.clone();

    // Bob tries to act while Alice is to play.
    let err = ctl.apply_move(&state, &mv(1, 0, Street::Front)).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::NotYourTurn));
    assert_eq!(state, before);

    // Same rejection on replay.
    let again = ctl.apply_move(&state, &mv(1, 0, Street::Front)).unwrap_err();
    assert_eq!(err.code(), again.code());
}

#[test]
fn street_advances_once_every_front_row_is_full() {
    let (mut ctl, mut state) = started(&["Alice", "Bob"], 5);
    for _ in 0..(2 * Row::Front.capacity() - 1) {
        let seat = state.current_player_index;
        state = ctl.apply_move(&state, &mv(seat, 0, Street::Front)).unwrap();
        assert_eq!(state.current_street, Street::Front);
    }
    state = ctl.apply_move(&state, &mv(1, 0, Street::Front)).unwrap();
    assert_eq!(state.current_street, Street::Middle);
    assert_eq!(state.current_player_index, 0);

    let late = ctl.apply_move(&state, &mv(0, 0, Street::Front)).unwrap_err();
    assert_eq!(late.kind(), Some(&ValidationKind::StaleStreet));
}

#[test]
fn empty_hand_is_refilled() {
    let (mut ctl, mut state) = started(&["Solo"], 9);
    // Three to the front, then two to the middle empties the opening hand.
    for _ in 0..5 {
        let street = state.current_street;
        state = ctl.apply_move(&state, &mv(0, 0, street)).unwrap();
    }
    assert_eq!(state.current_street, Street::Middle);
    assert_eq!(state.players[0].hand.len(), 3);
    assert_eq!(state.players[0].board.len(), 5);
}

#[test]
fn full_game_ends_with_winner_and_scores() {
    let (mut ctl, state) = started(&["Alice", "Bob"], 21);
    let history = play_out(&mut ctl, state);
    let last = history.last().unwrap();

    assert!(last.game_over);
    assert!(last.all_boards_full());
    assert_eq!(last.current_street, Street::Back);
    let winner = last.winner.as_deref().unwrap();
    assert!(last.players.iter().any(|p| p.name == winner));
    for snapshot in &history {
        assert!(snapshot.check_invariants().is_ok());
    }
    // 13 placements per player.
    assert_eq!(history.len(), 1 + 2 * 13);

    let err = ctl.apply_move(last, &mv(0, 0, Street::Back)).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::GameOver));
}

#[test]
fn four_players_use_the_whole_deck() {
    let (mut ctl, state) = started(&["A", "B", "C", "D"], 3);
    let last = play_out(&mut ctl, state).pop().unwrap();

    let cards: HashSet<Card> = last.players.iter().flat_map(|p| p.board.cards()).collect();
    assert_eq!(cards.len(), 52);
    assert!(last.players.iter().all(|p| p.hand.is_empty()));
}

#[test]
fn tied_scores_go_to_lowest_seat() {
    let mut ctl = stacked_controller(Box::new(FlatScorer));
    let state = ctl.start_game(None, &start_request(&["Alice", "Bob", "Carol"])).unwrap();
    let last = play_out(&mut ctl, state).pop().unwrap();
    assert_eq!(last.winner.as_deref(), Some("Alice"));
    assert!(last.players.iter().all(|p| p.score == 7));
}

#[test]
fn scorer_mismatch_is_a_collaborator_error() {
    let mut ctl = stacked_controller(Box::new(ShortScorer));
    let mut state = ctl.start_game(None, &start_request(&["Alice", "Bob"])).unwrap();
    let err = loop {
        let intent = mv(state.current_player_index, 0, state.current_street);
        match ctl.apply_move(&state, &intent) {
            Ok(next) => state = next,
            Err(err) => break err,
        }
    };
    assert!(err.kind().is_none());
    assert!(!state.game_over);
}

#[test]
fn stacked_deck_deals_in_seat_order() {
    let script = full_deck();
    let mut ctl = stacked_controller(Box::new(RowComparisonScorer));
    let state = ctl.start_game(None, &start_request(&["Alice", "Bob"])).unwrap();
    assert_eq!(state.players[0].hand, script[..5].to_vec());
    assert_eq!(state.players[1].hand, script[5..10].to_vec());
}

#[test]
fn new_game_allowed_only_after_game_over() {
    let (mut ctl, state) = started(&["Alice", "Bob"], 4);
    let again = Intent::StartGame(start_request(&["Carol"]));
    let err = ctl.apply(Some(&state), &again).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::GameAlreadyInProgress));

    let finished = play_out(&mut ctl, state).pop().unwrap();
    let fresh = ctl.apply(Some(&finished), &again).unwrap();
    assert_eq!(fresh.players.len(), 1);
    assert_eq!(fresh.players[0].name, "Carol");
    assert!(fresh.players[0].board.is_empty());
    assert!(!fresh.game_over);
}

#[test]
fn move_without_game_is_rejected() {
    let (mut ctl, _) = started(&["Alice"], 1);
    let intent = Intent::MakeMove(MakeMove::new(0, 0, Street::Front));
    let err = ctl.apply(None, &intent).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::NoGame));
}
