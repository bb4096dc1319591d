//! Per-category win counters and run results.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::constants::CATEGORY_COUNT;
use crate::types::{Category, Prize};

use super::config::SimulationConfig;

/// Win counts per category plus the earnings accumulator.
///
/// Every category is present from the start with a count of 0. Serializes as
/// a JSON object keyed by category label, in [`Category::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; CATEGORY_COUNT],
    earnings: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one evaluated ticket.
    #[inline(always)]
    pub fn record(&mut self, prize: Prize) {
        self.counts[prize.category.index()] += 1;
        self.earnings += prize.amount;
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    pub fn earnings(&self) -> u64 {
        self.earnings
    }

    /// Tickets recorded so far (sum of all counts).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(category, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.count(c)))
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

/// Results of a simulation run.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub config: SimulationConfig,
    pub total_spent: u64,
    pub earnings: u64,
    pub tally: Tally,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SimulationResult {
    /// Tickets evaluated over the run.
    pub fn tickets_evaluated(&self) -> u64 {
        self.tally.total()
    }

    /// Earnings minus spend.
    pub fn net(&self) -> i128 {
        self.earnings as i128 - self.total_spent as i128
    }

    /// Earnings per dollar spent; 0.0 for an empty run.
    pub fn return_ratio(&self) -> f64 {
        if self.total_spent == 0 {
            0.0
        } else {
            self.earnings as f64 / self.total_spent as f64
        }
    }
}
