//! Re-entry detection under the business composite key.
//!
//! Two entries collide when they agree on (party name, invoice number,
//! invoice date, amount): strings trimmed and lowercased, dates compared at
//! calendar-day granularity, amounts compared as decimal values so scale
//! and lexical form never matter. A candidate with no amount or no invoice
//! date can never collide; those cases are the validator's to reject.

use rust_decimal::Decimal;

use crate::entities::bundle_arrival::Model;
use crate::ledger::ArrivalCandidate;

fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

fn amounts_equal(candidate: Option<Decimal>, stored: Decimal) -> bool {
    // Decimal equality is numeric, so 500 == 500.00 and "100" parsed via
    // serde equals the number 100.
    candidate == Some(stored)
}

/// Returns the first stored record colliding with the candidate, in
/// collection order. The collision outcome itself does not depend on order.
pub fn find_duplicate<'a>(candidate: &ArrivalCandidate, existing: &'a [Model]) -> Option<&'a Model> {
    let party = norm(&candidate.party_name);
    let invoice_no = norm(&candidate.invoice_no);

    existing.iter().find(|record| {
        norm(&record.party_name) == party
            && norm(&record.invoice_no) == invoice_no
            && candidate.invoice_date == Some(record.invoice_date)
            && amounts_equal(candidate.amount, record.amount)
    })
}
