//! Card dealing collaborator.
//!
//! The controller owns a `Dealer`; the deck never appears in a snapshot.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Source of cards for a game.
pub trait Dealer: Send {
    /// Start a fresh deck for a new game.
    fn reset(&mut self);

    /// Take `n` cards off the deck.
    fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError>;

    /// Cards left in the deck.
    fn remaining(&self) -> usize;
}

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Standard deck shuffled with ChaCha8. A seed makes every game's deal
/// reproducible; consecutive games from one seed still get distinct decks.
pub struct ShuffledDeck {
    rng: ChaCha8Rng,
    cards: Vec<Card>,
}

impl ShuffledDeck {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng,
            cards: Vec::new(),
        }
    }
}

impl Dealer for ShuffledDeck {
    fn reset(&mut self) {
        let mut deck = full_deck();
        deck.shuffle(&mut self.rng);
        self.cards = deck;
    }

    fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::collaborator(format!(
                "Deck exhausted: wanted {n}, {} left",
                self.cards.len()
            )));
        }
        let at = self.cards.len() - n;
        Ok(self.cards.split_off(at))
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Deals a fixed card sequence in order. Useful for scripted games.
pub struct StackedDeck {
    script: Vec<Card>,
    cards: Vec<Card>,
}

impl StackedDeck {
    /// `script[0]` is the first card dealt.
    pub fn new(script: Vec<Card>) -> Self {
        Self {
            script,
            cards: Vec::new(),
        }
    }
}

impl Dealer for StackedDeck {
    fn reset(&mut self) {
        self.cards = self.script.iter().rev().copied().collect();
    }

    fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::collaborator(format!(
                "Deck exhausted: wanted {n}, {} left",
                self.cards.len()
            )));
        }
        let at = self.cards.len() - n;
        let mut dealt = self.cards.split_off(at);
        dealt.reverse();
        Ok(dealt)
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
