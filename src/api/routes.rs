//! Book catalog route configuration.

use crate::api::handlers::{
    checkout_handler, create_book_handler, get_book_handler, list_books_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Catalog routes.
///
/// # Endpoints
///
/// - `GET  /books`          - List all books
/// - `POST /books`          - Add a book
/// - `GET  /books/{id}`     - Fetch a single book
/// - `GET  /checkout?id=N`  - Take one copy of a book
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route("/books/{id}", get(get_book_handler))
        .route("/checkout", get(checkout_handler))
}
