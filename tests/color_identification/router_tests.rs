use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use color_identification_api::color_identification::build_color_identification_router;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::support::{IDENTITY_TOKEN, create_endpoint_harness, test_config, valid_claim};

const CLIENT_ORIGIN: &str = "http://localhost:8080";

fn color_router(user_id: &str) -> Router {
    let harness = create_endpoint_harness();
    harness.identity_facade.set_identity(user_id, vec![valid_claim()]);

    build_color_identification_router(&test_config(), harness.gate_state.authorizer_facade)
        .expect("router expected")
}

fn identification_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::GET)
        .uri("/identification")
        .header(header::ORIGIN, CLIENT_ORIGIN);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).expect("valid request")
}

fn assert_cors_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin header"),
        CLIENT_ORIGIN
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .expect("allow-credentials header"),
        "true"
    );
}

#[tokio::test]
async fn authorized_request_returns_color_with_cors_headers() {
    let response = color_router("u1")
        .oneshot(identification_request(Some(IDENTITY_TOKEN)))
        .await
        .expect("response expected");

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(response.headers());

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body expected");
    let body: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        body,
        json!({
            "yourUserIdentity": "u1",
            "yourColorIdentity": 14_707_893,
        })
    );
}

#[tokio::test]
async fn request_without_authorization_is_rejected_with_cors_headers() {
    let response = color_router("u1")
        .oneshot(identification_request(None))
        .await
        .expect("response expected");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_cors_headers(response.headers());
}

#[tokio::test]
async fn preflight_allows_configured_origin_with_credentials() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/identification")
        .header(header::ORIGIN, CLIENT_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .expect("valid request");

    let response = color_router("u1")
        .oneshot(request)
        .await
        .expect("response expected");

    assert!(response.status().is_success());
    assert_cors_headers(response.headers());
}
