//! # Book Inventory
//!
//! A small HTTP service for a book catalog built with Axum: list books, add
//! a book, fetch one by id, and check out a copy.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Book entity and repository trait
//! - **Application Layer** ([`application`]) - Catalog rules
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory catalog storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"  # Optional
//! cargo run
//!
//! curl http://127.0.0.1:8080/books
//! curl "http://127.0.0.1:8080/checkout?id=2"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::BookService;
    pub use crate::domain::entities::{Book, NewBook};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryBookRepository;
    pub use crate::state::AppState;
}
