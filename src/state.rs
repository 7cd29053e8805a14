//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::BookService;
use crate::infrastructure::persistence::InMemoryBookRepository;

/// Handler state. Cloning is cheap; services are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<InMemoryBookRepository>>,
}

impl AppState {
    /// Wires the service layer on top of the given catalog.
    pub fn new(repository: Arc<InMemoryBookRepository>) -> Self {
        Self {
            book_service: Arc::new(BookService::new(repository)),
        }
    }
}
