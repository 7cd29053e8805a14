//! Repository trait for the book catalog.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an attempted checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// One copy was taken; carries the book with its decremented quantity.
    CheckedOut(Book),
    /// The book exists but has no copies left.
    OutOfStock(Book),
    NotFound,
}

/// Repository interface for the book catalog.
///
/// The catalog is an ordered collection. Identifiers are not checked for
/// uniqueness; lookups scan in insertion order and the first matching
/// identifier wins.
///
/// The in-memory implementation never fails. [`AppError::Internal`] is the
/// contract for backends that can.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryBookRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every book in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Finds the first book with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Appends a book to the end of the catalog and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn insert(&self, book: Book) -> Result<Book, AppError>;

    /// Takes one copy of the book, if any are left.
    ///
    /// The availability check and the decrement happen atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn checkout(&self, id: i64) -> Result<CheckoutOutcome, AppError>;

    /// Number of books in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn count(&self) -> Result<usize, AppError>;
}
