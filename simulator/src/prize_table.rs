//! Prize table: (white matches, red match) -> (amount, category).
//!
//! Built from [`PRIZE_ENTRIES`] and validated once at startup. Validation is
//! split in two so that partial tables can still be built (and exercised) by
//! tests:
//!
//! 1. [`PrizeTable::from_entries`] rejects duplicate keys and white counts > 5.
//! 2. [`PrizeTable::validate`] rejects tables missing any reachable key.

use std::collections::BTreeMap;

use crate::constants::*;
use crate::error::LotteryError;
use crate::types::{Prize, PrizeKey};

#[derive(Clone, Debug)]
pub struct PrizeTable {
    entries: BTreeMap<PrizeKey, Prize>,
}

impl PrizeTable {
    /// The standard schedule, fully validated.
    pub fn standard() -> Result<Self, LotteryError> {
        let table = Self::from_entries(&PRIZE_ENTRIES)?;
        table.validate()?;
        Ok(table)
    }

    /// Build a table from explicit rows. Missing keys are allowed here.
    pub fn from_entries(rows: &[(PrizeKey, Prize)]) -> Result<Self, LotteryError> {
        let mut entries = BTreeMap::new();
        for &(key, prize) in rows {
            if key.white_matches as usize > WHITES_PER_DRAW {
                return Err(LotteryError::InvalidPrizeTable(format!(
                    "entry for {} white matches, at most {} possible",
                    key.white_matches, WHITES_PER_DRAW
                )));
            }
            if entries.insert(key, prize).is_some() {
                return Err(LotteryError::InvalidPrizeTable(format!(
                    "duplicate entry for ({}, {})",
                    key.white_matches, key.red_match
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Check that every reachable key has an entry.
    pub fn validate(&self) -> Result<(), LotteryError> {
        let missing: Vec<String> = reachable_keys()
            .filter(|key| !self.entries.contains_key(key))
            .map(|key| format!("({}, {})", key.white_matches, key.red_match))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LotteryError::InvalidPrizeTable(format!(
                "missing entries for {}",
                missing.join(", ")
            )))
        }
    }

    /// Prize for `key`, or [`LotteryError::InvalidCombination`] if absent.
    pub fn lookup(&self, key: PrizeKey) -> Result<Prize, LotteryError> {
        self.entries
            .get(&key)
            .copied()
            .ok_or(LotteryError::InvalidCombination {
                white_matches: key.white_matches,
                red_match: key.red_match,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All keys a pair of valid outcomes can produce.
pub fn reachable_keys() -> impl Iterator<Item = PrizeKey> {
    (0..=WHITES_PER_DRAW as u8).flat_map(|white_matches| {
        [false, true].into_iter().map(move |red_match| PrizeKey {
            white_matches,
            red_match,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn key(white_matches: u8, red_match: bool) -> PrizeKey {
        PrizeKey {
            white_matches,
            red_match,
        }
    }

    #[test]
    fn test_standard_table_validates() {
        let table = PrizeTable::standard().unwrap();
        assert_eq!(table.len(), REACHABLE_KEY_COUNT);
        assert_eq!(reachable_keys().count(), REACHABLE_KEY_COUNT);
    }

    #[test]
    fn test_standard_lookups() {
        let table = PrizeTable::standard().unwrap();
        let cases = [
            (5, true, 2_000_000_000, Category::FivePlusPowerball),
            (5, false, 1_000_000, Category::Five),
            (4, true, 50_000, Category::FourPlusPowerball),
            (4, false, 100, Category::Four),
            (3, true, 100, Category::ThreePlusPowerball),
            (3, false, 7, Category::Three),
            (2, true, 7, Category::TwoPlusPowerball),
            (2, false, 0, Category::Two),
            (1, true, 4, Category::OnePlusPowerball),
            (1, false, 0, Category::One),
            (0, true, 4, Category::Powerball),
            (0, false, 0, Category::Zero),
        ];
        for (w, r, amount, category) in cases {
            let prize = table.lookup(key(w, r)).unwrap();
            assert_eq!(prize, Prize { amount, category }, "key=({w}, {r})");
        }
    }

    #[test]
    fn test_lookup_out_of_domain() {
        let table = PrizeTable::standard().unwrap();
        let err = table.lookup(key(6, true)).unwrap_err();
        assert!(matches!(
            err,
            LotteryError::InvalidCombination {
                white_matches: 6,
                red_match: true
            }
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut rows = PRIZE_ENTRIES.to_vec();
        rows.push(PRIZE_ENTRIES[0]);
        assert!(matches!(
            PrizeTable::from_entries(&rows),
            Err(LotteryError::InvalidPrizeTable(_))
        ));
    }

    #[test]
    fn test_out_of_range_entry_rejected() {
        let rows = [(
            key(6, false),
            Prize {
                amount: 1,
                category: Category::Zero,
            },
        )];
        assert!(matches!(
            PrizeTable::from_entries(&rows),
            Err(LotteryError::InvalidPrizeTable(_))
        ));
    }

    #[test]
    fn test_missing_entry_fails_validation() {
        let rows: Vec<_> = PRIZE_ENTRIES
            .iter()
            .copied()
            .filter(|(k, _)| *k != key(2, false))
            .collect();
        let table = PrizeTable::from_entries(&rows).unwrap();
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("(2, false)"), "err={err}");
        assert!(matches!(
            table.lookup(key(2, false)),
            Err(LotteryError::InvalidCombination { .. })
        ));
    }
}
