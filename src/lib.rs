//! Arrival Ledger API Library
//!
//! This crate provides the core functionality for the arrival ledger API:
//! a single-tenant record of freight-lot arrivals with derived running
//! balances, filtered views and CSV export.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod migrator;
pub mod services;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: Arc<config::AppConfig>,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<db::DbPool>, config: Arc<config::AppConfig>) -> Self {
        let services = handlers::AppServices::new(db.clone(), config.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Full v1 API surface plus the status and health endpoints.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        .merge(handlers::arrivals::arrival_routes())
        .merge(handlers::reports::report_routes())
        .merge(handlers::suggestions::suggestion_routes())
}

async fn api_status() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let git = option_env!("GIT_HASH").unwrap_or("unknown");
    let build_time = option_env!("BUILD_TIME").unwrap_or("unknown");
    Json(json!({
        "status": "ok",
        "version": version,
        "git": git,
        "build_time": build_time,
        "service": "arrival-ledger-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": db_status,
        "checks": { "database": db_status },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
