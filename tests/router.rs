mod common;

use axum::http::StatusCode;
use book_inventory::config::Config;
use serde_json::Value;

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let server = common::app_server();

    let response = server.get("/books/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 3);

    server.get("/books/2/").await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let server = common::app_server();

    server.get("/authors").await.assert_status_not_found();
}

#[tokio::test]
async fn test_rate_limit_exceeded() {
    let config = Config {
        rate_limit_per_second: 1,
        rate_limit_burst: 1,
        ..Config::default()
    };
    let server = common::app_server_with_config(common::create_test_state(), &config);

    server.get("/books").await.assert_status_ok();

    let response = server.get("/books").await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    // Health is outside the limited routes.
    server.get("/health").await.assert_status_ok();
}
