//! Repository implementations.
//!
//! - [`InMemoryBookRepository`] - Book catalog held in process memory

pub mod memory_book_repository;

pub use memory_book_repository::InMemoryBookRepository;
