use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ServiceError,
    handlers::common::{
        created_response, no_content_response, success_response, PaginationMeta, PaginationParams,
    },
    ledger::{ArrivalCandidate, FilterSpec},
    AppState,
};

/// Filter dimensions accepted by the list, export and summary endpoints.
/// All fields are optional; an absent field leaves its dimension
/// unconstrained. `account_type` takes a comma-separated set (`S,T`),
/// `status` accepts `OPEN`, `PENDING` or `none`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub date: Option<String>,
    pub month: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub range_field: Option<String>,
    pub lorry_type: Option<String>,
    pub party_name: Option<String>,
    pub account_type: Option<String>,
    pub status: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn parse_date(value: &str, field: &str) -> Result<chrono::NaiveDate, ServiceError> {
    value
        .parse()
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid {field} (expected yyyy-MM-dd)")))
}

impl FilterQuery {
    /// Parses the raw query strings into a typed filter. Malformed values
    /// are a 400, not a silent no-op.
    pub fn into_spec(self) -> Result<FilterSpec, ServiceError> {
        let mut spec = FilterSpec::default();

        if let Some(raw) = non_blank(self.date.as_ref()) {
            spec.date = Some(parse_date(raw, "date")?);
        }
        if let Some(raw) = non_blank(self.month.as_ref()) {
            spec.month = Some(raw.parse().map_err(ServiceError::InvalidInput)?);
        }
        if let Some(raw) = non_blank(self.date_from.as_ref()) {
            spec.date_from = Some(parse_date(raw, "date_from")?);
        }
        if let Some(raw) = non_blank(self.date_to.as_ref()) {
            spec.date_to = Some(parse_date(raw, "date_to")?);
        }
        if let Some(raw) = non_blank(self.range_field.as_ref()) {
            spec.range_field = raw.parse().map_err(ServiceError::InvalidInput)?;
        }
        if let Some(raw) = non_blank(self.lorry_type.as_ref()) {
            spec.lorry_type = Some(raw.to_string());
        }
        if let Some(raw) = non_blank(self.party_name.as_ref()) {
            spec.party_name = Some(raw.to_string());
        }
        if let Some(raw) = non_blank(self.account_type.as_ref()) {
            for code in raw.split(',').filter(|c| !c.trim().is_empty()) {
                spec.account_types
                    .push(code.parse().map_err(ServiceError::InvalidInput)?);
            }
        }
        if let Some(raw) = non_blank(self.status.as_ref()) {
            spec.status = Some(raw.parse().map_err(ServiceError::InvalidInput)?);
        }

        Ok(spec)
    }
}

#[derive(Debug, Serialize)]
struct ListResponse<T> {
    data: Vec<T>,
    pagination: PaginationMeta,
    totals: crate::services::arrivals::ViewTotals,
}

async fn list_arrivals(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ServiceError> {
    let spec = filter.into_spec()?;
    let PaginationParams { page, per_page } = pagination;
    let page_result = state.services.arrivals.list(&spec, page, per_page).await?;
    Ok(success_response(ListResponse {
        pagination: PaginationMeta::new(page, per_page, page_result.total),
        data: page_result.items,
        totals: page_result.totals,
    }))
}

async fn create_arrival(
    State(state): State<AppState>,
    Json(candidate): Json<ArrivalCandidate>,
) -> Result<Response, ServiceError> {
    let model = state.services.arrivals.create(candidate).await?;
    Ok(created_response(model))
}

async fn get_arrival(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    let model = state.services.arrivals.get(id).await?;
    Ok(success_response(model))
}

async fn update_arrival(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(candidate): Json<ArrivalCandidate>,
) -> Result<Response, ServiceError> {
    let model = state.services.arrivals.update(id, candidate).await?;
    Ok(success_response(model))
}

async fn delete_arrival(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    state.services.arrivals.delete(id).await?;
    Ok(no_content_response())
}

async fn export_arrivals(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, ServiceError> {
    let spec = query.into_spec()?;
    let bytes = state.services.export.export_csv(&spec).await?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"bundle_arrivals.csv\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

pub fn arrival_routes() -> Router<AppState> {
    Router::new()
        .route("/arrivals", get(list_arrivals).post(create_arrival))
        .route(
            "/arrivals/:id",
            get(get_arrival).put(update_arrival).delete(delete_arrival),
        )
        .route("/arrivals/export.csv", get(export_arrivals))
}
