//! Core domain entities.
//!
//! Entities are plain data structures. Creation input is kept separate from
//! the stored record:
//!
//! - [`Book`] - A book in the catalog
//! - [`NewBook`] - Input for adding a book

pub mod book;

pub use book::{Book, NewBook, seed_catalog};
