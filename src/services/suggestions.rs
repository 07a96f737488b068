use crate::{
    config::AppConfig, errors::ServiceError, ledger::SuggestionSet,
    services::arrivals::ArrivalService,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Dropdown and autocomplete payload for the entry form.
#[derive(Debug, Serialize)]
pub struct SuggestionLists {
    /// Configured carrier names, in configuration order
    pub lorry_types: Vec<String>,
    /// Distinct parties observed in the collection, sorted
    pub party_names: Vec<String>,
    /// Distinct cities observed in the collection, sorted
    pub cities: Vec<String>,
    /// Configured garment vocabulary followed by observed item types
    pub item_types: Vec<String>,
}

/// Rebuilds suggestion lists from the live collection on every request.
/// Party and city suggestions come entirely from stored records; item
/// types start from the configured seed and grow with what users typed.
#[derive(Clone)]
pub struct SuggestionService {
    arrivals: ArrivalService,
    config: Arc<AppConfig>,
}

impl SuggestionService {
    pub fn new(arrivals: ArrivalService, config: Arc<AppConfig>) -> Self {
        Self { arrivals, config }
    }

    #[instrument(skip(self))]
    pub async fn lists(&self) -> Result<SuggestionLists, ServiceError> {
        let records = self.arrivals.load_all().await?;

        let mut parties = SuggestionSet::new();
        let mut cities = SuggestionSet::new();
        let mut item_types = SuggestionSet::seeded(&self.config.item_type_seed);
        for record in &records {
            parties.insert(&record.party_name);
            cities.insert(&record.city);
            if let Some(itemtype) = &record.itemtype {
                item_types.insert(itemtype);
            }
        }

        Ok(SuggestionLists {
            lorry_types: self.config.lorry_types.clone(),
            party_names: parties.sorted(),
            cities: cities.sorted(),
            item_types: item_types.into_vec(),
        })
    }
}
