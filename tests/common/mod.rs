use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use arrival_ledger_api::{config::AppConfig, db, AppState};

/// Helper harness for spinning up an application backed by a throwaway
/// SQLite database.
pub struct TestApp {
    router: Router,
    #[allow(dead_code)]
    pub state: AppState,
    // Dropping the tempdir removes the database file
    _db_dir: TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = db_dir.path().join("arrival_ledger_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), Arc::new(cfg));
        let router = Router::new()
            .nest("/api/v1", arrival_ledger_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
        }
    }

    /// Send a request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    /// Send a request and decode the JSON body, asserting the status.
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        expected_status: StatusCode,
    ) -> Value {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        assert_eq!(
            status,
            expected_status,
            "unexpected status; body: {}",
            String::from_utf8_lossy(&bytes)
        );
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    }

    /// Send a request and return the raw body, asserting the status.
    #[allow(dead_code)]
    pub async fn request_bytes(
        &self,
        method: Method,
        uri: &str,
        expected_status: StatusCode,
    ) -> Vec<u8> {
        let response = self.request(method, uri, None).await;
        assert_eq!(response.status(), expected_status);
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body")
            .to_vec()
    }
}

/// A complete, valid create payload; tests override the fields they
/// exercise.
#[allow(dead_code)]
pub fn arrival_payload(party_name: &str, invoice_no: &str, amount: f64) -> Value {
    serde_json::json!({
        "date": "2024-03-15",
        "lorry_type": "AKR",
        "lorry_no": "LR-1001",
        "city": "Vaniyambadi",
        "party_name": party_name,
        "account_type": "S",
        "bundle": "5",
        "invoice_no": invoice_no,
        "invoice_date": "2024-03-14",
        "amount": amount,
        "status": "OPEN"
    })
}
