//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod health;

pub use books::{checkout_handler, create_book_handler, get_book_handler, list_books_handler};
pub use health::health_handler;
