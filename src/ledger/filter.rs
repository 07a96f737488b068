//! Filter evaluation over the in-memory record collection.
//!
//! A [`FilterSpec`] is a conjunction of per-dimension constraints; an empty
//! dimension constrains nothing. Evaluation preserves the input order, so
//! callers that supply newest-first data get newest-first results.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::entities::bundle_arrival::{AccountType, ArrivalStatus, Model};

/// Which date column a from/to range constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeField {
    #[default]
    Arrival,
    Invoice,
}

impl FromStr for RangeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "arrival" | "date" => Ok(RangeField::Arrival),
            "invoice" => Ok(RangeField::Invoice),
            other => Err(format!("Unknown range field: {other}")),
        }
    }
}

/// Status selection. Records with no status are their own filterable state
/// (`Unset`, spelled `none` in query strings) and never match `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Open,
    Pending,
    Unset,
}

impl StatusFilter {
    fn matches(&self, status: Option<ArrivalStatus>) -> bool {
        match self {
            StatusFilter::Open => status == Some(ArrivalStatus::Open),
            StatusFilter::Pending => status == Some(ArrivalStatus::Pending),
            StatusFilter::Unset => status.is_none(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(StatusFilter::Open),
            "PENDING" => Ok(StatusFilter::Pending),
            "NONE" | "UNSET" | "-" => Ok(StatusFilter::Unset),
            other => Err(format!("Unknown status filter: {other}")),
        }
    }
}

/// A calendar year-month pair, parsed from the `yyyy-MM` form the month
/// picker submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month (expected yyyy-MM): {s}"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid month (expected yyyy-MM): {s}"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month (expected yyyy-MM): {s}"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Month out of range: {s}"));
        }
        Ok(YearMonth { year, month })
    }
}

/// Transient filter state for one view render. Absent fields mean "no
/// constraint on this dimension"; an empty account-type set likewise
/// excludes nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub date: Option<NaiveDate>,
    pub month: Option<YearMonth>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub range_field: RangeField,
    pub lorry_type: Option<String>,
    pub party_name: Option<String>,
    pub account_types: Vec<AccountType>,
    pub status: Option<StatusFilter>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.month.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.lorry_type.is_none()
            && self.party_name.is_none()
            && self.account_types.is_empty()
            && self.status.is_none()
    }

    /// Whether one record satisfies every active dimension.
    pub fn matches(&self, record: &Model) -> bool {
        if let Some(date) = self.date {
            if record.date != date {
                return false;
            }
        }

        if let Some(month) = self.month {
            if !month.contains(record.date) {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let target = match self.range_field {
                RangeField::Invoice => record.invoice_date,
                RangeField::Arrival => record.date,
            };
            if let Some(from) = self.date_from {
                if target < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if target > to {
                    return false;
                }
            }
        }

        if let Some(needle) = &self.lorry_type {
            if !contains_ignore_case(&record.lorry_type, needle) {
                return false;
            }
        }

        if let Some(needle) = &self.party_name {
            if !contains_ignore_case(&record.party_name, needle) {
                return false;
            }
        }

        if !self.account_types.is_empty() && !self.account_types.contains(&record.account_type) {
            return false;
        }

        if let Some(status) = self.status {
            if !status.matches(record.status) {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Evaluates a filter over the full collection, keeping input order.
pub fn apply_filters(records: &[Model], spec: &FilterSpec) -> Vec<Model> {
    records
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect()
}
