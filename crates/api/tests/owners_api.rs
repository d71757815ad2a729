//! HTTP-level tests for the owners page and owner registration requests.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, login_token, post_json_auth, put_json_auth, FakeMarketplace,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Owners
// ---------------------------------------------------------------------------

#[tokio::test]
async fn owners_fall_back_to_local_set_with_warning() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/owners", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["source"], "local");
    assert_eq!(json["data"]["total"], 3);
    assert!(json["data"]["warning"]
        .as_str()
        .unwrap()
        .contains("showing cached data"));
}

#[tokio::test]
async fn owners_come_from_upstream_when_reachable() {
    let app = common::build_test_app(FakeMarketplace::with_listings());
    let token = login_token(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/owners", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["source"], "upstream");
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], "owner_5");
    assert_eq!(json["data"]["items"][0]["status"], "active");
    assert_eq!(json["data"]["items"][0]["total_turfs"], 2);

    // The seeded console owners were replaced by the upstream set.
    let response = get_auth(app, "/api/v1/owners?search=rajesh", &token).await;
    assert_eq!(body_json(response).await["data"]["total"], 0);
}

#[tokio::test]
async fn owners_can_be_searched_and_filtered() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/owners?search=own001&status=all", &token).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], "OWN001");
}

#[tokio::test]
async fn create_owner_assigns_next_id_as_pending() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": " Ravi Desai ", "email": "ravi@example.com", "phone": "9812345678" });

    let response = post_json_auth(app, "/api/v1/owners", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "OWN004");
    assert_eq!(json["data"]["name"], "Ravi Desai");
    assert_eq!(json["data"]["status"], "pending");
}

#[tokio::test]
async fn create_owner_with_invalid_email_returns_400() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": "Ravi", "email": "not-an-email", "phone": "9812345678" });

    let response = post_json_auth(app, "/api/v1/owners", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn generate_credentials_rejects_whatsapp() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/owners/credentials",
        json!({ "name": "Sunil", "send_via": "email" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], "OWN004");
    assert!(!json["data"]["password"].as_str().unwrap().is_empty());

    let response = post_json_auth(
        app,
        "/api/v1/owners/credentials",
        json!({ "name": "Sunil", "send_via": "whatsapp" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn owner_status_update_and_delete() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/owners/OWN001/status",
        json!({ "status": "suspended" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "suspended");

    let response = delete_auth(app.clone(), "/api/v1/owners/OWN003", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app.clone(), "/api/v1/owners/OWN003", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/api/v1/owners", &token).await;
    assert_eq!(body_json(response).await["data"]["total"], 2);
}

#[tokio::test]
async fn unknown_owner_status_label_is_rejected() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/v1/owners/OWN001/status",
        json!({ "status": "retired" }),
        &token,
    )
    .await;

    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Owner registration requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn owner_requests_return_502_when_upstream_is_down() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/owner-requests", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn owner_requests_list_with_stats_and_filter() {
    let app = common::build_test_app(FakeMarketplace::with_requests());
    let token = login_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/owner-requests?status=pending", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["source"], "upstream");
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["request_id"], 11);
    assert_eq!(json["data"]["summary"]["total_requests"], 2);
}

#[tokio::test]
async fn approving_a_request_updates_counters_once() {
    let upstream = FakeMarketplace::with_requests();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    get_auth(app.clone(), "/api/v1/owner-requests", &token).await;

    let response = post_json_auth(app.clone(), "/api/v1/owner-requests/11/approve", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["request"]["status"], "Approved");
    assert_eq!(json["data"]["stats"]["pending_requests"], 0);
    assert_eq!(json["data"]["stats"]["approved_requests"], 2);
    assert!(upstream.calls().contains(&"approve_owner_request:11".to_string()));

    let response = post_json_auth(app, "/api/v1/owner-requests/11/approve", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn deciding_an_already_decided_request_skips_upstream() {
    let upstream = FakeMarketplace::with_requests();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    get_auth(app.clone(), "/api/v1/owner-requests", &token).await;

    let response = post_json_auth(
        app,
        "/api/v1/owner-requests/12/reject",
        json!({ "reason": "Duplicate" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(!upstream
        .calls()
        .iter()
        .any(|c| c.starts_with("reject_owner_request")));
}

#[tokio::test]
async fn rejecting_requires_a_reason() {
    let app = common::build_test_app(FakeMarketplace::with_requests());
    let token = login_token(app.clone()).await;
    get_auth(app.clone(), "/api/v1/owner-requests", &token).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/owner-requests/11/reject",
        json!({ "reason": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/owner-requests/11/reject",
        json!({ "reason": " Incomplete documents " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["request"]["status"], "Rejected");
    assert_eq!(json["data"]["stats"]["rejected_requests"], 1);

    let response = post_json_auth(
        app,
        "/api/v1/owner-requests/99/reject",
        json!({ "reason": "Unknown" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
