//! Book entity and its creation input.

/// A book held in the catalog.
///
/// `quantity` is the number of copies available for checkout. It is stored as a
/// signed integer so the catalog can detect (and refuse to go below) zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl Book {
    /// Creates a new Book instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let book = Book::new(1, "Head First Go", "Jay McGavren", 6);
    /// ```
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Returns true if at least one copy can be checked out.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Input data for adding a book to the catalog.
///
/// The identifier is client-supplied.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl From<NewBook> for Book {
    fn from(new_book: NewBook) -> Self {
        Self {
            id: new_book.id,
            title: new_book.title,
            author: new_book.author,
            quantity: new_book.quantity,
        }
    }
}

/// The catalog every fresh instance starts with.
pub fn seed_catalog() -> Vec<Book> {
    vec![
        Book::new(1, "The Go Programming Language", "Brian Kernighan", 2),
        Book::new(2, "Concurrency in Go", "Katherine Cox-Buday", 5),
        Book::new(3, "Head First Go", "Jay McGavren", 6),
    ]
}
