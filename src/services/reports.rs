use crate::{
    errors::ServiceError,
    ledger::{self, FilterSpec},
    services::arrivals::ArrivalService,
};
use chrono::Local;
use serde::Serialize;
use std::collections::HashSet;
use tracing::instrument;

/// Dashboard summary: filtered-view counts next to whole-collection
/// balance figures.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// Records matching the active filter
    pub total_entries: u64,
    /// Distinct carriers in the filtered view
    pub unique_lorry_types: u64,
    /// Distinct parties in the filtered view
    pub unique_parties: u64,
    /// Sum over the filtered view
    pub filtered_total: f64,
    /// Unconditional sum over everything ever recorded
    pub all_time_total: f64,
    /// Sum over the current calendar month
    pub current_month_total: f64,
    /// Month-to-date sum excluding today
    pub opening_balance: f64,
}

/// Service producing the summary-card figures.
#[derive(Clone)]
pub struct ReportService {
    arrivals: ArrivalService,
}

impl ReportService {
    pub fn new(arrivals: ArrivalService) -> Self {
        Self { arrivals }
    }

    #[instrument(skip(self, spec))]
    pub async fn summary(&self, spec: &FilterSpec) -> Result<SummaryReport, ServiceError> {
        let records = self.arrivals.load_all().await?;
        let today = Local::now().date_naive();
        let balances = ledger::compute_balances(&records, today);

        let filtered = ledger::apply_filters(&records, spec);
        let unique_lorry_types = filtered
            .iter()
            .map(|r| r.lorry_type.as_str())
            .collect::<HashSet<_>>()
            .len() as u64;
        let unique_parties = filtered
            .iter()
            .map(|r| r.party_name.as_str())
            .collect::<HashSet<_>>()
            .len() as u64;

        Ok(SummaryReport {
            total_entries: filtered.len() as u64,
            unique_lorry_types,
            unique_parties,
            filtered_total: ledger::filtered_total(&filtered),
            all_time_total: balances.all_time_total,
            current_month_total: balances.current_month_total,
            opening_balance: balances.opening_balance,
        })
    }
}
