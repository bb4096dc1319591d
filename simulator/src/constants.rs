//! Game constants and the fixed prize schedule.
//!
//! Pools and prize amounts follow the published Powerball rules:
//! - whites: 5 distinct balls from [`WHITE_BALL_MIN`]..=[`WHITE_BALL_MAX`]
//! - red (Powerball): 1 ball from [`RED_BALL_MIN`]..=[`RED_BALL_MAX`]
//!
//! The red pool is drawn independently of the whites, so a red value may
//! coincide with one of the white numbers.

use crate::types::{Category, Prize, PrizeKey};

/// Number of white balls on every outcome.
pub const WHITES_PER_DRAW: usize = 5;

/// Smallest white ball.
pub const WHITE_BALL_MIN: u8 = 1;

/// Largest white ball.
pub const WHITE_BALL_MAX: u8 = 69;

/// Number of balls in the white pool: 69.
pub const WHITE_POOL_SIZE: usize = (WHITE_BALL_MAX - WHITE_BALL_MIN + 1) as usize;

/// Smallest red ball.
pub const RED_BALL_MIN: u8 = 1;

/// Largest red ball.
pub const RED_BALL_MAX: u8 = 24;

/// Price of one ticket in dollars.
pub const TICKET_PRICE: u64 = 2;

/// Drawings per run: three per week for a year.
pub const NUM_DRAWINGS: usize = 156;

/// Tickets the player buys for every drawing.
pub const TICKETS_PER_DRAWING: usize = 2;

/// Number of prize categories (one per reachable key).
pub const CATEGORY_COUNT: usize = 12;

/// Every reachable `(white_matches, red_match)` key: 6 counts x 2 red states.
pub const REACHABLE_KEY_COUNT: usize = (WHITES_PER_DRAW + 1) * 2;

const fn entry(
    white_matches: u8,
    red_match: bool,
    amount: u64,
    category: Category,
) -> (PrizeKey, Prize) {
    (
        PrizeKey {
            white_matches,
            red_match,
        },
        Prize { amount, category },
    )
}

/// The prize schedule: (white matches, red match) -> (amount, category).
///
/// Winning rows first, then the three rows that pay nothing.
pub const PRIZE_ENTRIES: [(PrizeKey, Prize); CATEGORY_COUNT] = [
    entry(5, true, 2_000_000_000, Category::FivePlusPowerball),
    entry(5, false, 1_000_000, Category::Five),
    entry(4, true, 50_000, Category::FourPlusPowerball),
    entry(4, false, 100, Category::Four),
    entry(3, true, 100, Category::ThreePlusPowerball),
    entry(3, false, 7, Category::Three),
    entry(2, true, 7, Category::TwoPlusPowerball),
    entry(1, true, 4, Category::OnePlusPowerball),
    entry(0, true, 4, Category::Powerball),
    entry(2, false, 0, Category::Two),
    entry(1, false, 0, Category::One),
    entry(0, false, 0, Category::Zero),
];
