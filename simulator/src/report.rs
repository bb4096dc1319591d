//! Console report: spend, earnings and the per-category tally as JSON.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::LotteryError;
use crate::simulation::{SimulationResult, Tally};

/// `$` plus the amount with `,` thousands separators, e.g. `$1,000,000`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Tally as a JSON object with 4-space indentation.
pub fn tally_json(tally: &Tally) -> Result<String, LotteryError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tally.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Full end-of-run report.
pub fn render_report(result: &SimulationResult) -> Result<String, LotteryError> {
    Ok(format!(
        "Spent: {}\nEarnings: {}\nPrize Types:\n\n{}\n",
        format_currency(result.total_spent),
        format_currency(result.earnings),
        tally_json(&result.tally)?
    ))
}
