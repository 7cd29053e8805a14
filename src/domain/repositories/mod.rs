//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.

pub mod book_repository;

pub use book_repository::{BookRepository, CheckoutOutcome};

#[cfg(test)]
pub use book_repository::MockBookRepository;
