//! Handlers for the book catalog endpoints (list, create, fetch, checkout).

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::book::{BookItem, CreateBookRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Parses a textual book identifier. Surrounding whitespace is rejected.
fn parse_book_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("Invalid ID", json!({ "id": raw })))
}

/// Decodes a create-book body as JSON whatever its `Content-Type`.
fn decode_create_request(body: &[u8]) -> Result<CreateBookRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::bad_request("Invalid JSON", json!({ "reason": e.to_string() }))
    })
}

/// Lists every book in catalog order.
///
/// # Endpoint
///
/// `GET /books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.list_books().await?;

    Ok(Json(books.into_iter().map(BookItem::from).collect()))
}

/// Adds a book to the catalog and echoes it back.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// { "id": 4, "title": "Rust Atomics and Locks", "author": "Mara Bos", "quantity": 2 }
/// ```
///
/// The body is decoded as JSON regardless of the request's content type.
/// Missing fields default to zero values and duplicate ids are appended.
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON for a book or the quantity is
/// negative.
pub async fn create_book_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<BookItem>), AppError> {
    let body = body.map_err(|rejection| {
        AppError::bad_request("Invalid JSON", json!({ "reason": rejection.body_text() }))
    })?;
    let payload = decode_create_request(&body)?;

    payload.validate()?;

    let book = state.book_service.create_book(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Fetches a single book.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if no book has this id.
pub async fn get_book_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let id = parse_book_id(&raw_id)?;
    let book = state.book_service.get_book(id).await?;

    Ok(Json(book.into()))
}

/// Checks out one copy of a book and returns the updated record.
///
/// # Endpoint
///
/// `GET /checkout?id={id}`
///
/// When `id` is repeated, the first value is used.
///
/// # Errors
///
/// Returns 400 if the `id` parameter is missing or not an integer.
/// Returns 404 if no book has this id.
/// Returns 400 if the book has no copies left.
pub async fn checkout_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<BookItem>, AppError> {
    let Query(params) = query.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let raw_id = params
        .into_iter()
        .find_map(|(key, value)| (key == "id").then_some(value))
        .ok_or_else(|| AppError::bad_request("Missing query parameter", json!({ "param": "id" })))?;
    let id = parse_book_id(&raw_id)?;

    let book = state.book_service.checkout_book(id).await?;

    Ok(Json(book.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("42").unwrap(), 42);
        assert_eq!(parse_book_id("-3").unwrap(), -3);
        assert!(parse_book_id(" 7 ").is_err());
        assert!(matches!(
            parse_book_id("abc").unwrap_err(),
            AppError::Validation { .. }
        ));
        assert!(parse_book_id("").is_err());
    }

    #[test]
    fn test_decode_create_request() {
        let req = decode_create_request(br#"{"id":4,"title":"T","author":"A","quantity":1}"#)
            .unwrap();
        assert_eq!(req.id, 4);

        assert!(matches!(
            decode_create_request(b"{ not json").unwrap_err(),
            AppError::Validation { message, .. } if message == "Invalid JSON"
        ));
    }
}
