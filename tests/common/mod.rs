#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use book_inventory::config::Config;
use book_inventory::domain::entities::Book;
use book_inventory::infrastructure::persistence::InMemoryBookRepository;
use book_inventory::routes::app_router;
use book_inventory::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryBookRepository::seeded()))
}

pub fn create_state_with_books(books: Vec<Book>) -> AppState {
    AppState::new(Arc::new(InMemoryBookRepository::with_books(books)))
}

/// Full application router, served with peer info so the rate limiter can
/// key on the client address.
pub fn app_server_with_config(state: AppState, config: &Config) -> TestServer {
    let app = app_router(state, config).unwrap();
    TestServer::new(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}

pub fn make_server(state: AppState) -> TestServer {
    app_server_with_config(state, &Config::default())
}

pub fn app_server() -> TestServer {
    make_server(create_test_state())
}

pub fn seeded_server() -> TestServer {
    app_server()
}
