//! Pure computation core of the arrival ledger.
//!
//! Everything in here is synchronous and side-effect free: each function
//! takes the record collection (or a candidate record) by reference and
//! returns a new value. Handlers and services own all I/O; these functions
//! can be called from any number of concurrent requests without
//! coordination.

pub mod balance;
pub mod duplicate;
pub mod filter;
pub mod suggestions;
pub mod validate;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::bundle_arrival::{AccountType, ArrivalStatus};

pub use balance::{compute_balances, filtered_total, BalanceSummary};
pub use duplicate::find_duplicate;
pub use filter::{apply_filters, FilterSpec, RangeField, StatusFilter};
pub use suggestions::SuggestionSet;
pub use validate::{validate, FieldErrors};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    use crate::entities::bundle_arrival::{AccountType, ArrivalStatus, Model};

    /// Builds a fully populated record; tests override the fields they
    /// exercise.
    pub fn arrival(
        id: i64,
        date: &str,
        party_name: &str,
        account_type: AccountType,
        amount: Decimal,
    ) -> Model {
        let date: NaiveDate = date.parse().expect("test date must be yyyy-MM-dd");
        let now = Utc::now().fixed_offset();
        Model {
            id,
            date,
            lorry_type: "AKR".into(),
            lorry_no: format!("LR-{id}"),
            city: "Vaniyambadi".into(),
            party_name: party_name.into(),
            account_type,
            bundle: "5".into(),
            invoice_no: format!("INV{id}"),
            invoice_date: date,
            amount,
            phone_no: None,
            status: Some(ArrivalStatus::Open),
            itemtype: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A candidate arrival record as submitted by a client, before any rule has
/// approved it. Every field tolerates absence so that rule violations are
/// reported through the validator's field map rather than as a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalCandidate {
    pub date: Option<NaiveDate>,
    pub lorry_type: String,
    pub lorry_no: String,
    pub city: String,
    pub party_name: String,
    pub account_type: Option<AccountType>,
    pub bundle: String,
    pub invoice_no: String,
    pub invoice_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub phone_no: Option<String>,
    pub status: Option<ArrivalStatus>,
    pub itemtype: Option<String>,
}
