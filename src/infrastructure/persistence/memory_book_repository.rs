//! In-memory implementation of the book repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Book, seed_catalog};
use crate::domain::repositories::{BookRepository, CheckoutOutcome};
use crate::error::AppError;

/// Process-local book catalog.
///
/// Books are kept in insertion order in a `Vec` behind an async `RwLock`.
/// Reads take the shared lock; inserts and checkouts take the exclusive lock
/// for the whole check-then-mutate step.
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Creates a catalog pre-populated with the standard three books.
    pub fn seeded() -> Self {
        Self::with_books(seed_catalog())
    }

    /// Creates a catalog holding `books` in the given order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, book: Book) -> Result<Book, AppError> {
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn checkout(&self, id: i64) -> Result<CheckoutOutcome, AppError> {
        let mut books = self.books.write().await;

        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return Ok(CheckoutOutcome::NotFound);
        };

        if !book.is_available() {
            return Ok(CheckoutOutcome::OutOfStock(book.clone()));
        }

        book.quantity -= 1;
        Ok(CheckoutOutcome::CheckedOut(book.clone()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.books.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_list_order() {
        let repo = InMemoryBookRepository::seeded();

        let books = repo.list().await.unwrap();

        assert_eq!(books.len(), 3);
        assert_eq!(books[0].title, "The Go Programming Language");
        assert_eq!(books[2].title, "Head First Go");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryBookRepository::seeded();

        let found = repo.find_by_id(2).await.unwrap();
        assert_eq!(found.map(|b| b.title), Some("Concurrency in Go".to_string()));

        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_appends() {
        let repo = InMemoryBookRepository::seeded();

        let stored = repo
            .insert(Book::new(4, "The Rust Book", "Steve Klabnik", 1))
            .await
            .unwrap();

        assert_eq!(stored.id, 4);
        let books = repo.list().await.unwrap();
        assert_eq!(books.len(), 4);
        assert_eq!(books.last().unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_appends() {
        let repo = InMemoryBookRepository::seeded();

        repo.insert(Book::new(1, "Dup", "Dup", 1)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 4);
        // Lookups still return the first record with the id.
        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.title, "The Go Programming Language");
    }

    #[tokio::test]
    async fn test_checkout_decrements_until_empty() {
        let repo = InMemoryBookRepository::seeded();

        // Book 1 starts with two copies.
        for expected in [1, 0] {
            match repo.checkout(1).await.unwrap() {
                CheckoutOutcome::CheckedOut(book) => assert_eq!(book.quantity, expected),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        assert!(matches!(
            repo.checkout(1).await.unwrap(),
            CheckoutOutcome::OutOfStock(b) if b.quantity == 0
        ));
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_checkout_unknown_id() {
        let repo = InMemoryBookRepository::new();

        assert_eq!(repo.checkout(1).await.unwrap(), CheckoutOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_concurrent_checkouts_never_go_negative() {
        let repo = Arc::new(InMemoryBookRepository::with_books(vec![Book::new(
            1, "Popular", "Author", 5,
        )]));

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.checkout(1).await.unwrap() })
            })
            .collect();

        let mut checked_out = 0;
        for handle in handles {
            if let CheckoutOutcome::CheckedOut(_) = handle.await.unwrap() {
                checked_out += 1;
            }
        }

        assert_eq!(checked_out, 5);
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().quantity, 0);
    }
}
