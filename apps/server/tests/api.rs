use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use finpulse_core::events::totals_topic;
use finpulse_server::{app_router, build_state, config::Config};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn register(app: &axum::Router) -> (String, String) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "salary": 8000,
                "password": "secret1"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    (
        body["accessToken"].as_str().unwrap().to_string(),
        body["userId"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn healthz_works() {
    let state = build_state(&Config::from_env());
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn totals_require_authentication() {
    let state = build_state(&Config::from_env());
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard/totals")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_then_pull_totals() {
    let state = build_state(&Config::from_env());
    let app = app_router(state);
    let (token, _user_id) = register(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/dashboard/totals")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let totals = body_json(response).await;
    assert_eq!(totals["monthlyIncome"], 8000.0);
    assert_eq!(totals["totalBalance"], 8000.0);
    assert_eq!(totals["totalExpenses"], 0.0);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let state = build_state(&Config::from_env());
    let app = app_router(state);
    register(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"email": "asha@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn emi_mutation_triggers_push_on_user_topic() {
    let state = build_state(&Config::from_env());
    let app = app_router(state.clone());
    let (token, user_id) = register(&app).await;

    let mut rx = state.event_bus.subscribe();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/emis",
            Some(&token),
            json!({
                "loanType": "Car",
                "amount": 14400,
                "interestRate": 0,
                "tenure": 12,
                "startDate": "2024-01-01"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The worker recomputes off the request path and publishes the snapshot.
    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("push within deadline")
        .unwrap();
    assert_eq!(event.topic, totals_topic(&user_id));
    assert_eq!(event.payload["totalEMIMonthlyPayment"], 1200.0);
    assert_eq!(event.payload["totalBalance"], 6800.0);
}

#[tokio::test]
async fn unknown_financial_field_patch_is_rejected() {
    let state = build_state(&Config::from_env());
    let app = app_router(state);
    let (token, _) = register(&app).await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            "/api/financial-data/bogusField",
            Some(&token),
            json!({"value": 10}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("bogusField"));
}
