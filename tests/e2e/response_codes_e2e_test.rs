//! End-to-end test of the response code assertions against real HTTP
//! responses from a wiremock backend and in-process responses from an axum
//! router.

use axum::{body::Body, extract::Request, http::StatusCode, routing::get, Router};
use ingress_e2e_tests::utils::init_tracing;
use ingress_test_utils::assertions::{assert_response_codes, assert_response_codes_with, StatusCodeError};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backend1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("backend1"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/backend2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("backend2"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/unavailable"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_response_codes_over_http() -> anyhow::Result<()> {
    init_tracing();
    let server = backend().await;
    let client = reqwest::Client::new();

    let resp_1 = client.get(format!("{}/backend1", server.uri())).send().await?;
    let resp_2 = client.get(format!("{}/backend2", server.uri())).send().await?;
    assert_response_codes(&resp_1, &resp_2)?;

    let resp_3 = client.get(format!("{}/unavailable", server.uri())).send().await?;
    let resp_4 = client.get(format!("{}/missing", server.uri())).send().await?;
    assert_response_codes_with(&resp_3, &resp_4, 502, 404)?;
    assert_eq!(
        assert_response_codes(&resp_1, &resp_3),
        Err(StatusCodeError::Mismatch { position: 2, expected: 200, actual: 502 })
    );

    Ok(())
}

#[tokio::test]
async fn test_response_codes_from_router() -> anyhow::Result<()> {
    init_tracing();
    let app = Router::new()
        .route("/backend1", get(|| async { "backend1" }))
        .route("/maintenance", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }));

    let ok = app
        .clone()
        .oneshot(Request::builder().uri("/backend1").body(Body::empty())?)
        .await?;
    let down = app
        .oneshot(Request::builder().uri("/maintenance").body(Body::empty())?)
        .await?;

    assert_response_codes_with(&ok, &down, 200, 503)?;
    assert!(assert_response_codes(&ok, &down).is_err());

    Ok(())
}
