use axum::{extract::State, response::Response, routing::get, Router};

use crate::{errors::ServiceError, handlers::common::success_response, AppState};

async fn suggestions(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let lists = state.services.suggestions.lists().await?;
    Ok(success_response(lists))
}

pub fn suggestion_routes() -> Router<AppState> {
    Router::new().route("/suggestions", get(suggestions))
}
