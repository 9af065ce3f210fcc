// Turn gate rule tests: each rule in isolation and the first-failing-rule order.

use crate::domain::board::Row;
use crate::domain::intent::{Intent, MakeMove, PlayerRef};
use crate::domain::state::Street;
use crate::domain::test_state_helpers::{mv, start_request, started};
use crate::domain::turn_gate::{legal_moves, validate, validate_move, Admission};
use crate::errors::domain::ValidationKind;

fn kind_of(result: Result<Admission, crate::errors::DomainError>) -> ValidationKind {
    result
        .expect_err("intent should be rejected")
        .kind()
        .cloned()
        .expect("rejection should carry a validation kind")
}

#[test]
fn admits_current_player_on_current_street() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    let admission = validate_move(&state, &mv(0, 2, Street::Front)).unwrap();
    assert_eq!(
        admission,
        Admission::Move {
            seat: 0,
            card_index: 2,
            row: Row::Front
        }
    );
}

#[test]
fn other_seat_is_not_your_turn() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    assert_eq!(
        kind_of(validate_move(&state, &mv(1, 0, Street::Front))),
        ValidationKind::NotYourTurn
    );
}

#[test]
fn out_of_range_or_negative_seat_is_not_your_turn() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    let far = MakeMove {
        player_index: PlayerRef::Index(9),
        card_index: 0,
        street: Street::Front,
    };
    assert_eq!(kind_of(validate_move(&state, &far)), ValidationKind::NotYourTurn);

    let negative = MakeMove {
        player_index: PlayerRef::Index(-1),
        ..far
    };
    assert_eq!(
        kind_of(validate_move(&state, &negative)),
        ValidationKind::NotYourTurn
    );
}

#[test]
fn player_can_be_named() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    let by_name = MakeMove {
        player_index: PlayerRef::Name("Alice".into()),
        card_index: 0,
        street: Street::Front,
    };
    assert!(validate_move(&state, &by_name).is_ok());

    let wrong_name = MakeMove {
        player_index: PlayerRef::Name("Bob".into()),
        ..by_name.clone()
    };
    assert_eq!(
        kind_of(validate_move(&state, &wrong_name)),
        ValidationKind::NotYourTurn
    );

    let stranger = MakeMove {
        player_index: PlayerRef::Name("Carol".into()),
        ..by_name
    };
    assert_eq!(
        kind_of(validate_move(&state, &stranger)),
        ValidationKind::UnknownPlayer
    );
}

#[test]
fn wrong_street_is_stale() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    assert_eq!(
        kind_of(validate_move(&state, &mv(0, 0, Street::Middle))),
        ValidationKind::StaleStreet
    );
}

#[test]
fn card_index_outside_hand_is_invalid() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    let hand_len = state.players[0].hand.len();
    assert_eq!(
        kind_of(validate_move(&state, &mv(0, hand_len, Street::Front))),
        ValidationKind::InvalidCardIndex
    );
    let negative = MakeMove {
        card_index: -1,
        ..mv(0, 0, Street::Front)
    };
    assert_eq!(
        kind_of(validate_move(&state, &negative)),
        ValidationKind::InvalidCardIndex
    );
}

#[test]
fn full_target_row_is_row_full() {
    let (_, mut state) = started(&["Alice"], 3);
    // Fill the front row by hand, keeping the rest of the hand.
    let spare: Vec<_> = state.players[0].hand.drain(..3).collect();
    for card in spare {
        state.players[0].board = state.players[0].board.place(Row::Front, card).unwrap();
    }
    assert_eq!(
        kind_of(validate_move(&state, &mv(0, 0, Street::Front))),
        ValidationKind::RowFull
    );
}

#[test]
fn game_over_wins_over_every_other_rule() {
    let (_, mut state) = started(&["Alice", "Bob"], 1);
    state.game_over = true;
    state.winner = Some("Alice".into());
    // Wrong seat, wrong street and bad index: still GameOver.
    assert_eq!(
        kind_of(validate_move(&state, &mv(1, 99, Street::Back))),
        ValidationKind::GameOver
    );
}

#[test]
fn turn_is_checked_before_street_and_street_before_index() {
    let (_, state) = started(&["Alice", "Bob"], 1);
    assert_eq!(
        kind_of(validate_move(&state, &mv(1, 99, Street::Back))),
        ValidationKind::NotYourTurn
    );
    assert_eq!(
        kind_of(validate_move(&state, &mv(0, 99, Street::Back))),
        ValidationKind::StaleStreet
    );
}

#[test]
fn move_without_a_game_is_rejected() {
    let intent = Intent::MakeMove(mv(0, 0, Street::Front));
    assert_eq!(kind_of(validate(None, &intent)), ValidationKind::NoGame);
}

#[test]
fn start_game_gating() {
    let start = Intent::StartGame(start_request(&["Alice", "Bob"]));
    assert_eq!(validate(None, &start).unwrap(), Admission::StartGame);

    let (_, mut running) = started(&["Alice", "Bob"], 1);
    assert_eq!(
        kind_of(validate(Some(&running), &start)),
        ValidationKind::GameAlreadyInProgress
    );

    running.game_over = true;
    running.winner = Some("Bob".into());
    assert_eq!(validate(Some(&running), &start).unwrap(), Admission::StartGame);
}

#[test]
fn start_game_roster_rules() {
    for names in [
        &[][..],
        &["A", "B", "C", "D", "E"][..],
        &["Alice", "Alice"][..],
        &["Alice", "  "][..],
    ] {
        let intent = Intent::StartGame(start_request(names));
        assert_eq!(
            kind_of(validate(None, &intent)),
            ValidationKind::InvalidRoster,
            "{names:?}"
        );
    }
    let four = Intent::StartGame(start_request(&["A", "B", "C", "D"]));
    assert!(validate(None, &four).is_ok());
}

#[test]
fn legal_moves_are_exactly_the_admitted_placements() {
    let (_, state) = started(&["Alice", "Bob"], 4);
    let moves = legal_moves(&state, 0);
    assert_eq!(moves.len(), state.players[0].hand.len());
    for choice in &moves {
        assert!(validate_move(&state, &choice.into_intent(0)).is_ok());
    }
    let past_hand = mv(0, moves.len(), Street::Front);
    assert!(validate_move(&state, &past_hand).is_err());
}

#[test]
fn legal_moves_empty_when_not_on_turn_or_row_full() {
    let (_, mut state) = started(&["Alice", "Bob"], 4);
    assert!(legal_moves(&state, 1).is_empty());
    assert!(legal_moves(&state, 5).is_empty());

    let spare: Vec<_> = state.players[0].hand.drain(..3).collect();
    for card in spare {
        state.players[0].board = state.players[0].board.place(Row::Front, card).unwrap();
    }
    assert!(legal_moves(&state, 0).is_empty());

    state.game_over = true;
    assert!(legal_moves(&state, 0).is_empty());
}
