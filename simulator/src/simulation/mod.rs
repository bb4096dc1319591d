//! Lottery simulation and win statistics.
//!
//! - [`config`]: Run parameters (drawings, tickets per drawing, price)
//! - [`engine`]: Core simulation loop
//! - [`statistics`]: Per-category tally and run results

pub mod config;
pub mod engine;
pub mod statistics;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use engine::{run_seeded, run_simulation};
pub use statistics::{SimulationResult, Tally};
