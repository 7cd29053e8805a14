//! Book catalog service.

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::{BookRepository, CheckoutOutcome};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Message returned whenever a lookup misses.
pub const BOOK_NOT_FOUND: &str = "Book not found.";

/// Message returned when checking out a book with no copies left.
pub const BOOK_NOT_AVAILABLE: &str = "Book not available.";

/// Service implementing the catalog rules on top of a [`BookRepository`].
pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every book in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a book by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this identifier.
    pub async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(id, "Book lookup missed");
            AppError::not_found(BOOK_NOT_FOUND, json!({ "id": id }))
        })
    }

    /// Adds a book to the end of the catalog and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the quantity is negative.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        Self::validate_new_book(&new_book)?;

        let book = self.repository.insert(new_book.into()).await?;
        tracing::info!(id = book.id, title = %book.title, "Book added to catalog");

        Ok(book)
    }

    /// Takes one copy of a book and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this identifier.
    /// Returns [`AppError::Validation`] if no copies are left.
    pub async fn checkout_book(&self, id: i64) -> Result<Book, AppError> {
        match self.repository.checkout(id).await? {
            CheckoutOutcome::CheckedOut(book) => {
                tracing::info!(id, remaining = book.quantity, "Book checked out");
                Ok(book)
            }
            CheckoutOutcome::OutOfStock(book) => {
                tracing::debug!(id, "Checkout refused, no copies left");
                Err(AppError::bad_request(
                    BOOK_NOT_AVAILABLE,
                    json!({ "id": book.id, "quantity": book.quantity }),
                ))
            }
            CheckoutOutcome::NotFound => {
                tracing::debug!(id, "Checkout for unknown book");
                Err(AppError::not_found(BOOK_NOT_FOUND, json!({ "id": id })))
            }
        }
    }

    /// Number of books in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub async fn count_books(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    fn validate_new_book(new_book: &NewBook) -> Result<(), AppError> {
        if new_book.quantity < 0 {
            return Err(AppError::bad_request(
                "Quantity must not be negative",
                json!({ "quantity": new_book.quantity }),
            ));
        }

        Ok(())
    }
}
