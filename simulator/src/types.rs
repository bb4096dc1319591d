//! Core data structures: outcomes, prize keys, prizes and categories.
//!
//! An [`Outcome`] is one lottery result (a drawn ticket or the winning draw).
//! Evaluating a ticket against a draw produces a [`PrizeKey`], which the
//! prize table maps to a [`Prize`].

use serde::{Serialize, Serializer};

use crate::constants::*;
use crate::error::LotteryError;

/// Prize category, one per row of the prize schedule.
///
/// Declaration order is the report order: Powerball-matching categories from
/// the jackpot down, then the white-only categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    FivePlusPowerball,
    FourPlusPowerball,
    ThreePlusPowerball,
    TwoPlusPowerball,
    OnePlusPowerball,
    Powerball,
    Five,
    Four,
    Three,
    Two,
    One,
    Zero,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::FivePlusPowerball,
        Category::FourPlusPowerball,
        Category::ThreePlusPowerball,
        Category::TwoPlusPowerball,
        Category::OnePlusPowerball,
        Category::Powerball,
        Category::Five,
        Category::Four,
        Category::Three,
        Category::Two,
        Category::One,
        Category::Zero,
    ];

    /// Short label used in reports: "5+P", "5", ..., "P", "0".
    pub fn label(self) -> &'static str {
        match self {
            Category::FivePlusPowerball => "5+P",
            Category::FourPlusPowerball => "4+P",
            Category::ThreePlusPowerball => "3+P",
            Category::TwoPlusPowerball => "2+P",
            Category::OnePlusPowerball => "1+P",
            Category::Powerball => "P",
            Category::Five => "5",
            Category::Four => "4",
            Category::Three => "3",
            Category::Two => "2",
            Category::One => "1",
            Category::Zero => "0",
        }
    }

    /// Position in [`Category::ALL`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Categories whose hit is worth a debug log line.
    pub fn is_jackpot_class(self) -> bool {
        matches!(self, Category::FivePlusPowerball | Category::Five)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Lookup key into the prize table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PrizeKey {
    /// Whites shared between ticket and draw (0-5 for valid outcomes).
    pub white_matches: u8,
    /// Whether the red balls are equal.
    pub red_match: bool,
}

/// Amount paid and the category it is tallied under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Prize {
    pub amount: u64,
    pub category: Category,
}

/// One lottery result: 5 distinct whites and 1 red.
///
/// Whites are kept sorted ascending so equal sets compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outcome {
    whites: [u8; WHITES_PER_DRAW],
    red: u8,
}

impl Outcome {
    /// Build an outcome from explicit numbers, checking the pool rules.
    pub fn new(mut whites: [u8; WHITES_PER_DRAW], red: u8) -> Result<Self, LotteryError> {
        whites.sort_unstable();
        if let Some(&w) = whites
            .iter()
            .find(|&&w| !(WHITE_BALL_MIN..=WHITE_BALL_MAX).contains(&w))
        {
            return Err(LotteryError::InvalidOutcome(format!(
                "white ball {} outside {}..={}",
                w, WHITE_BALL_MIN, WHITE_BALL_MAX
            )));
        }
        if whites.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(LotteryError::InvalidOutcome(format!(
                "duplicate white balls in {:?}",
                whites
            )));
        }
        if !(RED_BALL_MIN..=RED_BALL_MAX).contains(&red) {
            return Err(LotteryError::InvalidOutcome(format!(
                "red ball {} outside {}..={}",
                red, RED_BALL_MIN, RED_BALL_MAX
            )));
        }
        Ok(Self { whites, red })
    }

    /// Caller guarantees distinct in-pool whites in ascending order.
    pub(crate) fn from_sorted_parts(whites: [u8; WHITES_PER_DRAW], red: u8) -> Self {
        debug_assert!(whites.windows(2).all(|pair| pair[0] < pair[1]));
        Self { whites, red }
    }

    /// Whites in ascending order.
    pub fn whites(&self) -> &[u8; WHITES_PER_DRAW] {
        &self.whites
    }

    pub fn red(&self) -> u8 {
        self.red
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let w = &self.whites;
        write!(
            f,
            "{} {} {} {} {} | {}",
            w[0], w[1], w[2], w[3], w[4], self.red
        )
    }
}
