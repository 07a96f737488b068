use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::{
    errors::ServiceError, handlers::arrivals::FilterQuery, handlers::common::success_response,
    AppState,
};

async fn summary(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, ServiceError> {
    let spec = query.into_spec()?;
    let report = state.services.reports.summary(&spec).await?;
    Ok(success_response(report))
}

pub fn report_routes() -> Router<AppState> {
    Router::new().route("/reports/summary", get(summary))
}
