//! Run parameters for a simulation.

use serde::Serialize;

use crate::constants::{NUM_DRAWINGS, TICKETS_PER_DRAWING, TICKET_PRICE};
use crate::error::LotteryError;

/// How many drawings to simulate and how many tickets to buy per drawing.
///
/// The player buys the same number of tickets for every drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    pub num_drawings: usize,
    pub tickets_per_drawing: usize,
    pub ticket_price: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_drawings: NUM_DRAWINGS,
            tickets_per_drawing: TICKETS_PER_DRAWING,
            ticket_price: TICKET_PRICE,
        }
    }
}

impl SimulationConfig {
    /// Tickets bought over the whole run.
    pub fn total_tickets(&self) -> Result<u64, LotteryError> {
        (self.num_drawings as u64)
            .checked_mul(self.tickets_per_drawing as u64)
            .ok_or_else(|| {
                LotteryError::InvalidConfig(format!(
                    "{} drawings x {} tickets overflows",
                    self.num_drawings, self.tickets_per_drawing
                ))
            })
    }

    /// drawings x tickets per drawing x price.
    pub fn total_spent(&self) -> Result<u64, LotteryError> {
        self.total_tickets()?
            .checked_mul(self.ticket_price)
            .ok_or_else(|| {
                LotteryError::InvalidConfig(format!(
                    "total spend at ${} per ticket overflows",
                    self.ticket_price
                ))
            })
    }
}
