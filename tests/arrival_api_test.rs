mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{arrival_payload, TestApp};

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(arrival_payload("ABC Traders", "INV-100", 1200.50)),
            StatusCode::CREATED,
        )
        .await;
    let id = created["id"].as_i64().expect("created record has an id");
    assert_eq!(created["party_name"], "ABC Traders");
    assert_eq!(created["account_type"], "S");
    assert_eq!(created["status"], "OPEN");

    let fetched = app
        .request_json(
            Method::GET,
            &format!("/api/v1/arrivals/{id}"),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(fetched["invoice_no"], "INV-100");
    assert_eq!(fetched["date"], "2024-03-15");
}

#[tokio::test]
async fn create_reports_every_missing_field() {
    let app = TestApp::new().await;

    let body = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(json!({})),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .await;

    let fields = body["fields"].as_object().expect("fields map present");
    assert_eq!(fields["bundle"], "Bundle is required");
    assert_eq!(fields["amount"], "Valid amount is required");
    assert_eq!(fields["party_name"], "Party name is required");
    assert_eq!(fields.len(), 10);
}

#[tokio::test]
async fn whitespace_fields_count_as_missing() {
    let app = TestApp::new().await;

    let mut payload = arrival_payload("ABC Traders", "INV-1", 100.0);
    payload["city"] = json!("   ");
    let body = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(payload),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .await;
    assert_eq!(body["fields"]["city"], "City is required");
}

#[tokio::test]
async fn duplicate_blocked_on_create_but_not_on_edit() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(arrival_payload("ABC Traders", "INV-7", 500.0)),
            StatusCode::CREATED,
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    // Same composite key, differently cased and padded
    let mut clash = arrival_payload("  abc traders ", "inv-7", 500.0);
    clash["city"] = json!("Salem");
    let body = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(clash),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .await;
    assert_eq!(
        body["fields"]["duplicate"],
        "Duplicate entry found (Party Name + Invoice No + Invoice Date + Amount)."
    );

    // Saving the record unchanged through the edit path must succeed
    app.request_json(
        Method::PUT,
        &format!("/api/v1/arrivals/{id}"),
        Some(arrival_payload("ABC Traders", "INV-7", 500.0)),
        StatusCode::OK,
    )
    .await;

    // A different invoice number is not a duplicate
    app.request_json(
        Method::POST,
        "/api/v1/arrivals",
        Some(arrival_payload("ABC Traders", "INV-8", 500.0)),
        StatusCode::CREATED,
    )
    .await;
}

#[tokio::test]
async fn list_filters_by_party_account_type_and_status() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/api/v1/arrivals",
        Some(arrival_payload("ABC Traders", "INV-1", 100.0)),
        StatusCode::CREATED,
    )
    .await;
    let mut second = arrival_payload("XYZ Mills", "INV-2", 50.0);
    second["account_type"] = json!("T");
    second["status"] = json!("PENDING");
    app.request_json(Method::POST, "/api/v1/arrivals", Some(second), StatusCode::CREATED)
        .await;
    let mut third = arrival_payload("abc weavers", "INV-3", 75.0);
    third["status"] = serde_json::Value::Null;
    app.request_json(Method::POST, "/api/v1/arrivals", Some(third), StatusCode::CREATED)
        .await;

    // Case-insensitive substring over party name
    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?party_name=ABC",
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total"], 2);

    // Account-type set
    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?account_type=T,R",
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["party_name"], "XYZ Mills");

    // Records without a status are their own filterable state
    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?status=none",
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["party_name"], "abc weavers");

    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?status=OPEN",
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["party_name"], "ABC Traders");
}

#[tokio::test]
async fn list_paginates_newest_first() {
    let app = TestApp::new().await;

    for i in 1..=3 {
        app.request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(arrival_payload("Party", &format!("INV-{i}"), 10.0 * i as f64)),
            StatusCode::CREATED,
        )
        .await;
    }

    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?page=1&per_page=2",
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);
    let page_one = body["data"].as_array().unwrap();
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_one[0]["invoice_no"], "INV-3");

    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?page=2&per_page=2",
            None,
            StatusCode::OK,
        )
        .await;
    let page_two = body["data"].as_array().unwrap();
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0]["invoice_no"], "INV-1");
}

#[tokio::test]
async fn list_totals_follow_the_filter() {
    let app = TestApp::new().await;

    app.request_json(
        Method::POST,
        "/api/v1/arrivals",
        Some(arrival_payload("ABC Traders", "INV-1", 100.0)),
        StatusCode::CREATED,
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/v1/arrivals",
        Some(arrival_payload("XYZ Mills", "INV-2", 50.0)),
        StatusCode::CREATED,
    )
    .await;

    let body = app
        .request_json(
            Method::GET,
            "/api/v1/arrivals?party_name=XYZ",
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["totals"]["filtered_total"], 50.0);
    // Records are dated in the past, so the month-to-date figures are zero
    assert_eq!(body["totals"]["opening_balance"], 0.0);
    assert_eq!(body["totals"]["current_day_total"], 0.0);
}

#[tokio::test]
async fn update_changes_fields() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(arrival_payload("ABC Traders", "INV-1", 100.0)),
            StatusCode::CREATED,
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let mut edit = arrival_payload("ABC Traders", "INV-1", 100.0);
    edit["status"] = json!("PENDING");
    edit["city"] = json!("Erode");
    let updated = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/arrivals/{id}"),
            Some(edit),
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["status"], "PENDING");
    assert_eq!(updated["city"], "Erode");
    assert_eq!(updated["id"], id);
}

#[tokio::test]
async fn delete_then_fetch_is_not_found() {
    let app = TestApp::new().await;

    let created = app
        .request_json(
            Method::POST,
            "/api/v1/arrivals",
            Some(arrival_payload("ABC Traders", "INV-1", 100.0)),
            StatusCode::CREATED,
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request(Method::DELETE, &format!("/api/v1/arrivals/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    app.request_json(
        Method::GET,
        &format!("/api/v1/arrivals/{id}"),
        None,
        StatusCode::NOT_FOUND,
    )
    .await;

    app.request_json(
        Method::DELETE,
        &format!("/api/v1/arrivals/{id}"),
        None,
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[tokio::test]
async fn malformed_filter_values_are_bad_requests() {
    let app = TestApp::new().await;

    app.request_json(
        Method::GET,
        "/api/v1/arrivals?date=15-03-2024",
        None,
        StatusCode::BAD_REQUEST,
    )
    .await;
    app.request_json(
        Method::GET,
        "/api/v1/arrivals?month=march",
        None,
        StatusCode::BAD_REQUEST,
    )
    .await;
    app.request_json(
        Method::GET,
        "/api/v1/arrivals?account_type=Q",
        None,
        StatusCode::BAD_REQUEST,
    )
    .await;
}
