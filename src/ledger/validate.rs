//! Required-field and semantic checks, composed with the duplicate
//! detector on the creation path.
//!
//! This is a decision function: every outcome is reported through the
//! returned field map, nothing is thrown, and an empty map means the
//! candidate may be written.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::entities::bundle_arrival::Model;
use crate::ledger::{duplicate, ArrivalCandidate};

/// Field name to human-readable message for every rule the candidate
/// violates.
pub type FieldErrors = BTreeMap<&'static str, String>;

const DUPLICATE_MESSAGE: &str =
    "Duplicate entry found (Party Name + Invoice No + Invoice Date + Amount).";

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

/// Validates a candidate record. Passing the existing collection enables
/// the duplicate check; edits pass `None` so that a record never collides
/// with itself.
pub fn validate(candidate: &ArrivalCandidate, existing: Option<&[Model]>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if candidate.date.is_none() {
        errors.insert("date", "Date is required".to_string());
    }
    require(&mut errors, "lorry_type", &candidate.lorry_type, "Lorry type is required");
    require(&mut errors, "lorry_no", &candidate.lorry_no, "Lorry number is required");
    require(&mut errors, "city", &candidate.city, "City is required");
    require(&mut errors, "party_name", &candidate.party_name, "Party name is required");
    if candidate.account_type.is_none() {
        errors.insert("account_type", "Account type is required".to_string());
    }
    require(&mut errors, "bundle", &candidate.bundle, "Bundle is required");
    require(&mut errors, "invoice_no", &candidate.invoice_no, "Invoice number is required");
    if candidate.invoice_date.is_none() {
        errors.insert("invoice_date", "Invoice date is required".to_string());
    }
    match candidate.amount {
        Some(amount) if amount > Decimal::ZERO => {}
        _ => {
            errors.insert("amount", "Valid amount is required".to_string());
        }
    }
    // status, phone_no and itemtype are always optional

    if let Some(existing) = existing {
        if duplicate::find_duplicate(candidate, existing).is_some() {
            errors.insert("duplicate", DUPLICATE_MESSAGE.to_string());
        }
    }

    errors
}
