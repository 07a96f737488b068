//! Running-balance arithmetic over date-partitioned records.
//!
//! All figures are derived from the full, unfiltered collection against a
//! reference "today". Summation happens in `f64` and keeps full precision;
//! two-digit rounding is applied only when a figure is formatted for
//! display or export.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::warn;

use crate::entities::bundle_arrival::Model;

/// The derived figures shown next to every table render and on the summary
/// dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceSummary {
    /// Everything booked earlier in the reference month, strictly before
    /// today. Resets to zero on the 1st.
    pub opening_balance: f64,
    /// Everything booked exactly today.
    pub current_day_total: f64,
    /// Month-to-date including today; always the exact sum of the two
    /// figures above.
    pub total_with_opening_balance: f64,
    /// Unconditional sum over the whole collection.
    pub all_time_total: f64,
    /// Everything dated anywhere in the reference month, future days
    /// included.
    pub current_month_total: f64,
}

fn amount_of(record: &Model) -> f64 {
    match record.amount.to_f64() {
        Some(v) => v,
        None => {
            // Decimal-to-float conversion only fails on values far outside
            // the column's 10,2 range; skip the record rather than poison
            // the totals.
            warn!(id = record.id, "skipping record with unrepresentable amount");
            0.0
        }
    }
}

/// Computes every balance figure in one pass over the collection.
pub fn compute_balances(records: &[Model], today: NaiveDate) -> BalanceSummary {
    let mut opening_balance = 0.0;
    let mut current_day_total = 0.0;
    let mut all_time_total = 0.0;
    let mut current_month_total = 0.0;

    for record in records {
        let amount = amount_of(record);
        all_time_total += amount;

        let in_reference_month =
            record.date.year() == today.year() && record.date.month() == today.month();
        if in_reference_month {
            current_month_total += amount;
            if record.date.day() < today.day() {
                opening_balance += amount;
            }
        }
        if record.date == today {
            current_day_total += amount;
        }
    }

    BalanceSummary {
        opening_balance,
        current_day_total,
        total_with_opening_balance: opening_balance + current_day_total,
        all_time_total,
        current_month_total,
    }
}

/// Sum of amounts over a (typically filtered) slice, shown in the table
/// footer.
pub fn filtered_total(records: &[Model]) -> f64 {
    records.iter().map(amount_of).sum()
}

/// Two-digit display rounding, applied at the formatting boundary only.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
