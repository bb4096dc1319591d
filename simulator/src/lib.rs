//! # Powerball — Lottery Drawing Simulator
//!
//! Simulates a player buying quick-pick tickets for a run of Powerball
//! drawings and tallies what they win.
//!
//! ## Overview
//!
//! | Piece | Rust module | Description |
//! |-------|-------------|-------------|
//! | Draw generator | [`draw_mechanics::lottery_draw`] | 5 distinct whites from 1..=69, 1 red from 1..=24 |
//! | Ticket evaluator | [`game_mechanics::check_ticket`] | (white matches, red match) -> prize via [`prize_table`] |
//! | Simulation driver | [`simulation::run_simulation`] | N drawings x K tickets, spend/earnings/tally |
//! | Report | [`report::render_report`] | Currency lines plus the tally as 4-space JSON |
//!
//! ## Randomness
//!
//! Every random draw goes through a generator passed in by the caller, so a
//! seeded [`rand::rngs::SmallRng`] reproduces a run exactly
//! ([`simulation::run_seeded`]).
//!
//! ## Prize table
//!
//! The 12-row schedule in [`constants::PRIZE_ENTRIES`] covers every key two
//! valid outcomes can produce. [`prize_table::PrizeTable::standard`] checks
//! that at startup; a lookup that still misses raises
//! [`error::LotteryError::InvalidCombination`] and aborts the run.

pub mod constants;
pub mod draw_mechanics;
pub mod env_config;
pub mod error;
pub mod game_mechanics;
pub mod prize_table;
pub mod report;
pub mod simulation;
pub mod types;
