//! Scoring collaborator.
//!
//! The controller only calls [`Scorer::score`] once every board is full and
//! picks the winner from the result; how boards are ranked lives here.

use std::cmp::Ordering;

use crate::domain::board::Row;
use crate::domain::state::Player;
use crate::domain::Card;

/// Scores finished boards. Returns one score per player, in seat order.
pub trait Scorer: Send {
    fn score(&self, players: &[Player]) -> Vec<i32>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// Comparable strength of a row: category first, then tie-break ranks.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandValue {
    pub category: HandCategory,
    pub ranks: Vec<u8>,
}

/// Evaluate a row of up to five cards. Straights and flushes only count on
/// five-card rows.
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank.value() as usize] += 1;
    }

    // (count, value), most frequent first, then highest value.
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
    let ranks: Vec<u8> = groups.iter().map(|&(_, v)| v).collect();

    if cards.len() == 5 {
        let flush = cards.iter().all(|c| c.suit == cards[0].suit);
        let straight_high = straight_high(&ranks);
        match (flush, straight_high) {
            (true, Some(high)) => {
                return HandValue {
                    category: HandCategory::StraightFlush,
                    ranks: vec![high],
                }
            }
            (true, None) => {
                return HandValue {
                    category: HandCategory::Flush,
                    ranks,
                }
            }
            (false, Some(high)) => {
                return HandValue {
                    category: HandCategory::Straight,
                    ranks: vec![high],
                }
            }
            (false, None) => {}
        }
    }

    let shape: Vec<u8> = groups.iter().map(|&(n, _)| n).collect();
    let category = match shape.as_slice() {
        [4, ..] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };
    HandValue { category, ranks }
}

/// High card of a five-distinct-rank straight, with the wheel (A-2-3-4-5) as 5.
fn straight_high(ranks_desc: &[u8]) -> Option<u8> {
    if ranks_desc.len() != 5 {
        return None;
    }
    let mut sorted = ranks_desc.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if sorted.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(sorted[0]);
    }
    if sorted == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Pairwise row comparison: one point per row won against each opponent,
/// plus a bonus of three for winning more rows than that opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowComparisonScorer;

impl RowComparisonScorer {
    pub const MAJORITY_BONUS: i32 = 3;

    fn pair_score(a: &Player, b: &Player) -> (i32, i32) {
        let (mut sa, mut sb) = (0, 0);
        for row in Row::ALL {
            match evaluate(a.board.row(row)).cmp(&evaluate(b.board.row(row))) {
                Ordering::Greater => sa += 1,
                Ordering::Less => sb += 1,
                Ordering::Equal => {}
            }
        }
        match sa.cmp(&sb) {
            Ordering::Greater => sa += Self::MAJORITY_BONUS,
            Ordering::Less => sb += Self::MAJORITY_BONUS,
            Ordering::Equal => {}
        }
        (sa, sb)
    }
}

impl Scorer for RowComparisonScorer {
    fn score(&self, players: &[Player]) -> Vec<i32> {
        let mut scores = vec![0; players.len()];
        for i in 0..players.len() {
            for j in (i + 1)..players.len() {
                let (si, sj) = Self::pair_score(&players[i], &players[j]);
                scores[i] += si;
                scores[j] += sj;
            }
        }
        scores
    }
}

/// Seat with the highest score; ties go to the lowest seat.
pub fn winner_seat(scores: &[i32]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (seat, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((seat, score)),
        }
    }
    best.map(|(seat, _)| seat)
}
