use crate::{
    db::DbPool,
    entities::bundle_arrival::{self, Entity as BundleArrival, Model},
    errors::ServiceError,
    ledger::{self, ArrivalCandidate, BalanceSummary, FilterSpec},
};
use chrono::{Local, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Derived figures shown beneath every table render: the footer total of
/// the filtered view plus the month-to-date figures over the full set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ViewTotals {
    pub filtered_total: f64,
    pub opening_balance: f64,
    pub current_day_total: f64,
    pub total_with_opening_balance: f64,
}

/// One filtered, paginated slice of the collection.
#[derive(Debug, Serialize)]
pub struct ArrivalPage {
    pub items: Vec<Model>,
    /// Count of records matching the filter (before pagination)
    pub total: u64,
    pub totals: ViewTotals,
}

/// Repository over the arrival record store. Owns the refresh policy: every
/// read loads the collection newest-first and derives the view from it, so
/// there is no client-side mirror to keep coherent.
#[derive(Clone)]
pub struct ArrivalService {
    db_pool: Arc<DbPool>,
}

impl ArrivalService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Loads the full collection, newest first. Id breaks created-at ties
    /// so ordering stays deterministic under coarse timestamps.
    pub async fn load_all(&self) -> Result<Vec<Model>, ServiceError> {
        let db = &*self.db_pool;
        BundleArrival::find()
            .order_by_desc(bundle_arrival::Column::CreatedAt)
            .order_by_desc(bundle_arrival::Column::Id)
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Applies the filter and paginates in memory. The collection is small
    /// by design; the balance figures must see the unfiltered set anyway.
    #[instrument(skip(self, spec))]
    pub async fn list(
        &self,
        spec: &FilterSpec,
        page: u64,
        per_page: u64,
    ) -> Result<ArrivalPage, ServiceError> {
        let records = self.load_all().await?;
        let today = Local::now().date_naive();
        let balances = ledger::compute_balances(&records, today);

        let filtered = ledger::apply_filters(&records, spec);
        let filtered_total = ledger::filtered_total(&filtered);
        let total = filtered.len() as u64;

        let per_page = per_page.max(1);
        let offset = (page.max(1) - 1) * per_page;
        let items = filtered
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .collect();

        Ok(ArrivalPage {
            items,
            total,
            totals: view_totals(filtered_total, balances),
        })
    }

    /// Validated create. The duplicate gate runs here and only here.
    #[instrument(skip(self, candidate), fields(party_name = %candidate.party_name))]
    pub async fn create(&self, candidate: ArrivalCandidate) -> Result<Model, ServiceError> {
        let existing = self.load_all().await?;
        let errors = ledger::validate(&candidate, Some(&existing));
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let db = &*self.db_pool;
        let now = Utc::now().fixed_offset();
        let mut active = active_model_from(candidate, None)?;
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let model = active.insert(db).await.map_err(ServiceError::DatabaseError)?;
        info!(id = model.id, "arrival record created");
        Ok(model)
    }

    pub async fn get(&self, id: i64) -> Result<Model, ServiceError> {
        let db = &*self.db_pool;
        BundleArrival::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .ok_or_else(|| ServiceError::NotFound(format!("Arrival record {id} not found")))
    }

    /// Edit-in-place. Re-runs the validator but skips the duplicate gate so
    /// a record never collides with itself.
    #[instrument(skip(self, candidate))]
    pub async fn update(&self, id: i64, candidate: ArrivalCandidate) -> Result<Model, ServiceError> {
        let errors = ledger::validate(&candidate, None);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let current = self.get(id).await?;

        let db = &*self.db_pool;
        let mut active = active_model_from(candidate, Some(&current))?;
        active.id = Set(id);
        active.updated_at = Set(Utc::now().fixed_offset());

        let model = active.update(db).await.map_err(ServiceError::DatabaseError)?;
        info!(id = model.id, "arrival record updated");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = BundleArrival::delete_by_id(id)
            .exec(db)
            .await
            .map_err(ServiceError::DatabaseError)?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Arrival record {id} not found"
            )));
        }
        info!(id, "arrival record deleted");
        Ok(())
    }
}

fn view_totals(filtered_total: f64, balances: BalanceSummary) -> ViewTotals {
    ViewTotals {
        filtered_total,
        opening_balance: balances.opening_balance,
        current_day_total: balances.current_day_total,
        total_with_opening_balance: balances.total_with_opening_balance,
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Turns an approved candidate into an active model. The validator has
/// already vouched for the required fields; their absence here is a
/// programming error, not a user error.
fn active_model_from(
    candidate: ArrivalCandidate,
    current: Option<&Model>,
) -> Result<bundle_arrival::ActiveModel, ServiceError> {
    let (Some(date), Some(account_type), Some(invoice_date), Some(amount)) = (
        candidate.date,
        candidate.account_type,
        candidate.invoice_date,
        candidate.amount,
    ) else {
        return Err(ServiceError::InternalError(
            "candidate accepted with missing required fields".into(),
        ));
    };

    let mut active = bundle_arrival::ActiveModel {
        date: Set(date),
        lorry_type: Set(candidate.lorry_type.trim().to_string()),
        lorry_no: Set(candidate.lorry_no.trim().to_string()),
        city: Set(candidate.city.trim().to_string()),
        party_name: Set(candidate.party_name.trim().to_string()),
        account_type: Set(account_type),
        bundle: Set(candidate.bundle.trim().to_string()),
        invoice_no: Set(candidate.invoice_no.trim().to_string()),
        invoice_date: Set(invoice_date),
        amount: Set(amount),
        phone_no: Set(blank_to_none(candidate.phone_no)),
        status: Set(candidate.status),
        itemtype: Set(blank_to_none(candidate.itemtype)),
        ..Default::default()
    };

    if let Some(current) = current {
        active.created_at = Set(current.created_at);
    }

    Ok(active)
}
