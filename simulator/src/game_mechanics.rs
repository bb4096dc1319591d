//! Ticket evaluation: how much a ticket wins against a draw.

use crate::draw_mechanics::count_white_matches;
use crate::error::LotteryError;
use crate::prize_table::PrizeTable;
use crate::types::{Outcome, Prize, PrizeKey};

/// Key for a ticket against the winning draw: shared whites plus red equality.
pub fn prize_key(ticket: &Outcome, draw: &Outcome) -> PrizeKey {
    PrizeKey {
        white_matches: count_white_matches(ticket, draw),
        red_match: ticket.red() == draw.red(),
    }
}

/// Win amount and category for `ticket` against `draw`.
///
/// Fails with [`LotteryError::InvalidCombination`] if the table has no row for
/// the computed key. With the standard table that only happens if the data
/// model itself is broken.
pub fn check_ticket(
    table: &PrizeTable,
    ticket: &Outcome,
    draw: &Outcome,
) -> Result<Prize, LotteryError> {
    table.lookup(prize_key(ticket, draw))
}
