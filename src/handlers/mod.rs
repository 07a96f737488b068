use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::DbPool,
    services::{
        arrivals::ArrivalService, export::ExportService, reports::ReportService,
        suggestions::SuggestionService,
    },
};

pub mod arrivals;
pub mod common;
pub mod reports;
pub mod suggestions;

/// Container wiring every service to the shared pool and configuration.
#[derive(Clone)]
pub struct AppServices {
    pub arrivals: ArrivalService,
    pub export: ExportService,
    pub reports: ReportService,
    pub suggestions: SuggestionService,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, config: Arc<AppConfig>) -> Self {
        let arrivals = ArrivalService::new(db_pool);
        Self {
            export: ExportService::new(arrivals.clone()),
            reports: ReportService::new(arrivals.clone()),
            suggestions: SuggestionService::new(arrivals.clone(), config),
            arrivals,
        }
    }
}
