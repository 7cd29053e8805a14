//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Catalog listing, creation and checkout

pub mod services;
