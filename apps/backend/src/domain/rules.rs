use crate::domain::board::{Row, BOARD_SLOTS};
use crate::domain::state::Street;

/// Most players a single 52-card deck can serve (13 slots each).
pub const MAX_PLAYERS: usize = 52 / BOARD_SLOTS;
pub const MIN_PLAYERS: usize = 1;

/// Cards dealt to every player when a game starts.
pub const OPENING_HAND: usize = 5;

/// Cards dealt when a player's hand runs dry before their board is full.
pub const REFILL_HAND: usize = 3;

/// Row a card is placed on for a given street.
pub const fn target_row(street: Street) -> Row {
    match street {
        Street::Front => Row::Front,
        Street::Middle => Row::Middle,
        Street::Back => Row::Back,
    }
}

/// Cards dealt to a player with `free_slots` open slots whose hand is empty.
pub fn refill_size(free_slots: usize) -> usize {
    REFILL_HAND.min(free_slots)
}
