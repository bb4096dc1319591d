//! Drawing outcomes and comparing their white balls.

use rand::seq::index;
use rand::Rng;

use crate::constants::*;
use crate::types::Outcome;

/// Draw a random outcome: 5 distinct whites from 1..=69, 1 red from 1..=24.
///
/// Used both for the winning draw and for every quick-pick ticket.
pub fn lottery_draw<R: Rng + ?Sized>(rng: &mut R) -> Outcome {
    let mut whites = [0u8; WHITES_PER_DRAW];
    let picks = index::sample(rng, WHITE_POOL_SIZE, WHITES_PER_DRAW);
    for (slot, i) in whites.iter_mut().zip(picks.iter()) {
        *slot = WHITE_BALL_MIN + i as u8;
    }
    whites.sort_unstable();
    let red = rng.random_range(RED_BALL_MIN..=RED_BALL_MAX);
    Outcome::from_sorted_parts(whites, red)
}

/// Size of the intersection of two white sets.
///
/// Both sets are sorted, so a single merge pass suffices.
pub fn count_white_matches(a: &Outcome, b: &Outcome) -> u8 {
    let (a, b) = (a.whites(), b.whites());
    let (mut i, mut j) = (0, 0);
    let mut matches = 0u8;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                matches += 1;
                i += 1;
                j += 1;
            }
        }
    }
    matches
}
