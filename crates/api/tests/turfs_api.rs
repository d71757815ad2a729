//! HTTP-level tests for turfs, featured listings and reference data.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, login_token, post_json_auth, put_json_auth, FakeMarketplace,
};
use serde_json::json;
use turfdesk_client::dto::State;

// ---------------------------------------------------------------------------
// Turfs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn turf_list_resolves_owner_names_and_filters_by_city() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/turfs", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["source"], "local");
    assert_eq!(json["data"]["items"][0]["owner_name"], "Rajesh Kumar");

    let response = get_auth(app.clone(), "/api/v1/turfs?city=bangalore", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], "TURF002");

    let response = get_auth(app, "/api/v1/turfs?search=priya&city=all", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
}

#[tokio::test]
async fn create_turf_for_local_owner_stays_local() {
    let upstream = FakeMarketplace::offline();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    let body = json!({
        "name": "Green Field Arena",
        "city": "Pune",
        "owner_id": "OWN003",
        "sports": ["Cricket"],
        "price_per_hour": 1800.0,
    });

    let response = post_json_auth(app.clone(), "/api/v1/turfs", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "TURF003");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["owner_name"], "Amit Patel");
    assert!(!upstream.calls().iter().any(|c| c.starts_with("create_turf")));

    let response = get_auth(app, "/api/v1/turfs", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["items"][0]["name"], "Green Field Arena");
}

#[tokio::test]
async fn create_turf_for_unknown_local_owner_returns_404() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": "Nowhere Ground", "city": "Pune", "owner_id": "OWN999" });

    let response = post_json_auth(app, "/api/v1/turfs", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_turf_for_upstream_owner_goes_upstream_first() {
    let upstream = FakeMarketplace::accepting_writes();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": "Skyline Turf", "city": "Delhi", "owner_id": "owner_42" });

    let response = post_json_auth(app, "/api/v1/turfs", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(upstream.calls().contains(&"create_turf:42".to_string()));
    // No id in the upstream body, so the turf keeps a console id.
    assert_eq!(body_json(response).await["data"]["id"], "TURF003");
}

#[tokio::test]
async fn turf_created_upstream_takes_the_upstream_id() {
    let upstream = FakeMarketplace::with_listings();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": "Skyline Turf", "city": "Chennai", "owner_id": "owner_5" });

    let response = post_json_auth(app.clone(), "/api/v1/turfs", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["id"], "turf_77");
    assert!(upstream.calls().contains(&"create_turf:5".to_string()));

    let body = json!({
        "turf_id": "turf_77",
        "badge": "New Arrival",
        "start_date": "2025-11-01",
        "end_date": "2025-11-30",
    });
    let response = post_json_auth(app.clone(), "/api/v1/featured", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json_auth(app, "/api/v1/featured/turf_77/toggle", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let calls = upstream.calls();
    assert!(calls.contains(&"create_featured:77:3".to_string()));
    assert!(calls.contains(&"update_featured:77:3".to_string()));
}

#[tokio::test]
async fn console_turfs_are_featured_without_upstream_sync() {
    let upstream = FakeMarketplace::accepting_writes();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": "Green Field Arena", "city": "Pune", "owner_id": "OWN003" });
    let response = post_json_auth(app.clone(), "/api/v1/turfs", body, &token).await;
    let id = body_json(response).await["data"]["id"].as_str().unwrap().to_string();

    let body = json!({
        "turf_id": id,
        "badge": "Top Pick",
        "start_date": "2025-11-01",
        "end_date": "2025-11-30",
    });
    let response = post_json_auth(app, "/api/v1/featured", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(!upstream.calls().iter().any(|c| c.contains("featured")));
}

#[tokio::test]
async fn turf_list_comes_from_upstream_when_reachable() {
    let app = common::build_test_app(FakeMarketplace::with_listings());
    let token = login_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/turfs", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["source"], "upstream");
    assert!(json["data"]["warning"].is_null());
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["items"][0]["id"], "turf_3");
    assert_eq!(json["data"]["items"][0]["owner_id"], "owner_5");
    assert_eq!(json["data"]["items"][0]["owner_name"], "Sunil Rao");
}

#[tokio::test]
async fn failed_upstream_turf_create_changes_nothing() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;
    let body = json!({ "name": "Skyline Turf", "city": "Delhi", "owner_id": "owner_42" });

    let response = post_json_auth(app.clone(), "/api/v1/turfs", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = get_auth(app, "/api/v1/turfs", &token).await;
    assert_eq!(body_json(response).await["data"]["total"], 2);
}

#[tokio::test]
async fn turf_status_update() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/v1/turfs/TURF002/status",
        json!({ "status": "inactive" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "inactive");
}

// ---------------------------------------------------------------------------
// Featured turfs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn featured_list_is_ordered_and_resolved() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/featured", &token).await;
    let json = body_json(response).await;
    let featured = json["data"].as_array().unwrap();
    assert_eq!(featured.len(), 2);
    assert_eq!(featured[0]["turf_id"], "TURF001");
    assert_eq!(featured[0]["turf_name"], "Elite Sports Arena");
    assert_eq!(featured[0]["owner_name"], "Rajesh Kumar");

    let response = get_auth(app, "/api/v1/featured/available", &token).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn featuring_an_already_featured_turf_conflicts() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;
    let body = json!({
        "turf_id": "TURF001",
        "badge": "Hot",
        "start_date": "2025-11-01",
        "end_date": "2025-11-30",
    });

    let response = post_json_auth(app, "/api/v1/featured", body, &token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn remove_then_re_add_featured_turf() {
    let upstream = FakeMarketplace::offline();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;

    let response = delete_auth(app.clone(), "/api/v1/featured/TURF001", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), "/api/v1/featured", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["turf_id"], "TURF002");
    assert_eq!(json["data"][0]["position"], 1);

    let body = json!({
        "turf_id": "TURF001",
        "badge": " Weekend Special ",
        "start_date": "2025-11-01",
        "end_date": "2025-11-30",
    });
    let response = post_json_auth(app, "/api/v1/featured", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 2);
    assert_eq!(json["data"]["badge"], "Weekend Special");

    // Seeded turfs are unknown upstream, so nothing was synced.
    assert!(!upstream.calls().iter().any(|c| c.contains("featured")));
}

#[tokio::test]
async fn featured_range_must_not_be_inverted() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;
    delete_auth(app.clone(), "/api/v1/featured/TURF002", &token).await;
    let body = json!({
        "turf_id": "TURF002",
        "badge": "Top Pick",
        "start_date": "2025-11-30",
        "end_date": "2025-11-01",
    });

    let response = post_json_auth(app, "/api/v1/featured", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggle_and_reprioritize_featured_turfs() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = put_json_auth(app.clone(), "/api/v1/featured/TURF001/toggle", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["active"], false);
    assert_eq!(json["data"]["running"], false);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/featured/TURF002/priority",
        json!({ "position": 1 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["turf_id"], "TURF002");
    assert_eq!(json["data"][1]["turf_id"], "TURF001");
    assert_eq!(json["data"][1]["position"], 2);

    let response = put_json_auth(
        app,
        "/api/v1/featured/TURF002/priority",
        json!({ "position": 0 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

async fn feature(app: axum::Router, token: &str, turf_id: &str) {
    let body = json!({
        "turf_id": turf_id,
        "badge": "Top Pick",
        "start_date": "2025-11-01",
        "end_date": "2025-11-30",
    });
    let response = post_json_auth(app, "/api/v1/featured", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn renumbered_featured_turfs_are_synced_upstream() {
    let upstream = FakeMarketplace::with_listings();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    get_auth(app.clone(), "/api/v1/turfs", &token).await;
    feature(app.clone(), &token, "turf_3").await;
    feature(app.clone(), &token, "turf_4").await;

    // [TURF001, TURF002, turf_3, turf_4] -> [TURF001, TURF002, turf_4, turf_3]
    let mark = upstream.calls().len();
    let response = put_json_auth(
        app.clone(),
        "/api/v1/featured/turf_4/priority",
        json!({ "position": 3 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        upstream.calls()[mark..],
        ["update_featured:4:3".to_string(), "update_featured:3:4".to_string()]
    );

    // Removing the head moves both marketplace turfs up one slot.
    let mark = upstream.calls().len();
    let response = delete_auth(app.clone(), "/api/v1/featured/TURF001", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        upstream.calls()[mark..],
        ["update_featured:4:2".to_string(), "update_featured:3:3".to_string()]
    );

    let response = get_auth(app, "/api/v1/featured", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][1]["turf_id"], "turf_4");
    assert_eq!(json["data"][1]["position"], 2);
}

#[tokio::test]
async fn failed_featured_sync_keeps_local_order() {
    let upstream = FakeMarketplace::with_listings();
    let app = common::build_test_app(upstream.clone());
    let token = login_token(app.clone()).await;
    get_auth(app.clone(), "/api/v1/turfs", &token).await;
    feature(app.clone(), &token, "turf_3").await;
    upstream.go_offline();

    let response = delete_auth(app.clone(), "/api/v1/featured/TURF002", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = get_auth(app, "/api/v1/featured", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"][1]["turf_id"], "TURF002");
    assert_eq!(json["data"][2]["turf_id"], "turf_3");
    assert_eq!(json["data"][2]["position"], 3);
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sports_fall_back_to_built_in_list() {
    let app = common::build_test_app(FakeMarketplace::offline());
    let token = login_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/reference/sports", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["source"], "local");
    assert!(json["data"]["total"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn states_come_from_upstream_or_fail() {
    let upstream = std::sync::Arc::new(FakeMarketplace {
        states: Some(vec![State {
            id: 21,
            name: "Maharashtra".into(),
        }]),
        ..FakeMarketplace::default()
    });
    let app = common::build_test_app(upstream);
    let token = login_token(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/reference/states", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["name"], "Maharashtra");

    let response = get_auth(app, "/api/v1/reference/states/21/cities", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
