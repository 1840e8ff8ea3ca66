//! End-to-end tests for the admin CRUD API over an in-memory database.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use larder::api::rest::register_routes;

async fn app() -> Router {
    register_routes(common::service().await)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn section_crud_round_trip() {
    let app = app().await;

    // Create
    let response = app
        .clone()
        .oneshot(with_json("POST", "/sections", json!({"name": "Dairy"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["name"], "Dairy");
    assert_eq!(created["label"], "Dairy");
    let id = created["id"].as_i64().unwrap();

    // Fetch
    let response = app
        .clone()
        .oneshot(get(&format!("/sections/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Update
    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            &format!("/sections/{id}"),
            json!({"name": "Frozen"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Frozen");

    // List
    let response = app.clone().oneshot(get("/sections")).await.unwrap();
    let listing = json_body(response).await;
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["items"][0]["name"], "Frozen");

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/sections/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get(&format!("/sections/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_lists_entity_schemas() {
    let app = app().await;

    let response = app.oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let document = json_body(response).await;
    let schemas = &document["components"]["schemas"];
    for name in ["SectionDto", "ItemPayload", "SupplyDto", "UsageMethodDto"] {
        assert!(schemas.get(name).is_some(), "missing schema {name}");
    }
}

#[tokio::test]
async fn missing_row_yields_problem_document() {
    let app = app().await;

    let response = app.oneshot(get("/items/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let problem = json_body(response).await;
    assert_eq!(problem["status"], 404);
    assert!(problem["detail"].as_str().unwrap().contains("item"));
}

#[tokio::test]
async fn duplicate_code_yields_conflict() {
    let app = app().await;

    let payload = json!({"code": "cups", "description": "Measuring cups"});
    let response = app
        .clone()
        .oneshot(with_json("POST", "/units", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(with_json("POST", "/units", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let problem = json_body(response).await;
    assert!(problem["detail"].as_str().unwrap().contains("cups"));
}

#[tokio::test]
async fn blank_name_yields_bad_request() {
    let app = app().await;

    let response = app
        .oneshot(with_json("POST", "/sources", json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn usage_creation_over_the_wire_sets_defaults() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;
    let supply = common::seed_supply(&service, trip.id, item.id, unit.id, 2.5).await;
    let app = register_routes(service);

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/usages",
            json!({"supply_id": supply.id, "amount": 1.5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["method"], "U");
    assert!(created["when"].is_string());
    assert!(created["label"]
        .as_str()
        .unwrap()
        .starts_with("1.5 of 2.5 kg Flour bought "));

    // A supply created without a price reports the 0.00 default.
    let response = app
        .oneshot(get(&format!("/supplies/{}", supply.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["price"], "0.00");
}

#[tokio::test]
async fn referenced_source_delete_yields_conflict() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    common::seed_trip(&service, source.id).await;
    let app = register_routes(service);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/sources/{}", source.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
