//! Simulation engine: plays N drawings with K quick-pick tickets each.
//!
//! For every drawing a winning outcome is drawn, then each ticket is drawn and
//! checked against it. Winnings go into a running total and every ticket is
//! tallied under its prize category. A missing prize table row aborts the run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::draw_mechanics::lottery_draw;
use crate::error::LotteryError;
use crate::game_mechanics::check_ticket;
use crate::prize_table::PrizeTable;

use super::config::SimulationConfig;
use super::statistics::{SimulationResult, Tally};

/// Run a simulation with a caller-supplied generator.
pub fn run_simulation<R: Rng + ?Sized>(
    config: &SimulationConfig,
    table: &PrizeTable,
    rng: &mut R,
) -> Result<SimulationResult, LotteryError> {
    let total_spent = config.total_spent()?;
    info!(
        drawings = config.num_drawings,
        tickets_per_drawing = config.tickets_per_drawing,
        ticket_price = config.ticket_price,
        "starting simulation"
    );

    let start = Instant::now();
    let mut tally = Tally::new();
    for drawing in 0..config.num_drawings {
        let winning = lottery_draw(rng);
        for _ in 0..config.tickets_per_drawing {
            let ticket = lottery_draw(rng);
            let prize = check_ticket(table, &ticket, &winning)?;
            if prize.category.is_jackpot_class() {
                debug!(
                    drawing,
                    %ticket,
                    %winning,
                    category = %prize.category,
                    amount = prize.amount,
                    "jackpot-class hit"
                );
            }
            tally.record(prize);
        }
    }
    let elapsed = start.elapsed();

    let result = SimulationResult {
        config: *config,
        total_spent,
        earnings: tally.earnings(),
        tally,
        elapsed,
    };
    info!(
        tickets = result.tickets_evaluated(),
        earnings = result.earnings,
        net = %result.net(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "simulation finished"
    );
    Ok(result)
}

/// Run with the standard prize table and a generator seeded from `seed`.
///
/// Equal seeds give equal results.
pub fn run_seeded(
    config: &SimulationConfig,
    seed: u64,
) -> Result<SimulationResult, LotteryError> {
    let table = PrizeTable::standard()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    run_simulation(config, &table, &mut rng)
}
