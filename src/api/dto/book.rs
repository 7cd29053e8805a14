//! DTOs for the book catalog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, NewBook};

/// JSON representation of a book.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl From<Book> for BookItem {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            quantity: book.quantity,
        }
    }
}

/// Request body for `POST /books`.
///
/// The identifier is chosen by the client. Missing fields take their zero
/// value: `0` for numbers, an empty string for text.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateBookRequest {
    pub id: i64,
    pub title: String,
    pub author: String,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i64,
}

impl From<CreateBookRequest> for NewBook {
    fn from(req: CreateBookRequest) -> Self {
        Self {
            id: req.id,
            title: req.title,
            author: req.author,
            quantity: req.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_item_json_shape() {
        let item = BookItem::from(Book::new(1, "Head First Go", "Jay McGavren", 6));

        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({"id": 1, "title": "Head First Go", "author": "Jay McGavren", "quantity": 6})
        );
    }

    #[test]
    fn test_create_request_validation() {
        let ok: CreateBookRequest = serde_json::from_value(json!({
            "id": 4, "title": "Rust Atomics and Locks", "author": "Mara Bos", "quantity": 2
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let negative: CreateBookRequest = serde_json::from_value(json!({
            "id": 4, "title": "T", "author": "A", "quantity": -3
        }))
        .unwrap();
        let errors = negative.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_create_request_missing_fields_default_to_zero() {
        let req: CreateBookRequest =
            serde_json::from_value(json!({ "title": "Only title" })).unwrap();

        assert_eq!(req.id, 0);
        assert_eq!(req.title, "Only title");
        assert_eq!(req.author, "");
        assert_eq!(req.quantity, 0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_wrong_types() {
        let result = serde_json::from_value::<CreateBookRequest>(json!({ "id": "four" }));
        assert!(result.is_err());
    }
}
