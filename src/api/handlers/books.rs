//! Handlers for book endpoints.
//!
//! Each handler maps one verb+path to a [`crate::application::services::BookService`]
//! call. Lookup misses come back as [`AppError::NotFound`] (404); anything
//! else the service returns is forwarded unchanged.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::book::{BookItem, BookRequest, PatchBookRequest};
use crate::api::extract::{BookId, ValidJson};
use crate::domain::entities::Book;
use crate::error::AppError;
use crate::state::AppState;

fn to_items(books: Vec<Book>) -> Json<Vec<BookItem>> {
    Json(books.into_iter().map(BookItem::from).collect())
}

/// Lists all books.
///
/// # Endpoint
///
/// `GET /books`
///
/// Returns an empty array when no books are stored.
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(to_items(books))
}

/// Fetches a single book.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn get_book_handler(
    BookId(id): BookId,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(book.into()))
}

/// Creates a book. The id is generated by the server.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// { "title": "Dune", "author": "Frank Herbert" }
/// ```
///
/// # Errors
///
/// Returns 400 if `title` or `author` is missing or empty.
pub async fn create_book_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<BookRequest>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.create_book(payload.into()).await?;
    Ok(Json(book.into()))
}

/// Replaces the title and author of a book.
///
/// # Endpoint
///
/// `PUT /books/{id}`
///
/// # Errors
///
/// Returns 400 if `title` or `author` is missing or empty.
/// Returns 404 if the book does not exist.
pub async fn replace_book_handler(
    BookId(id): BookId,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<BookRequest>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.replace_book(id, payload.into()).await?;
    Ok(Json(book.into()))
}

/// Partially updates a book.
///
/// # Endpoint
///
/// `PATCH /books/{id}`
///
/// All fields are optional. Absent fields keep their stored value.
///
/// # Errors
///
/// Returns 400 if a provided field is empty.
/// Returns 404 if the book does not exist.
pub async fn patch_book_handler(
    BookId(id): BookId,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<PatchBookRequest>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.patch_book(id, payload.into()).await?;
    Ok(Json(book.into()))
}

/// Deletes a book and returns the removed record.
///
/// # Endpoint
///
/// `DELETE /books/{id}`
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn delete_book_handler(
    BookId(id): BookId,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.delete_book(id).await?;
    Ok(Json(book.into()))
}

/// Returns the number of stored books as a bare JSON integer.
///
/// # Endpoint
///
/// `GET /books/count`
pub async fn count_books_handler(State(state): State<AppState>) -> Result<Json<i64>, AppError> {
    let count = state.book_service.count_books().await?;
    Ok(Json(count))
}

/// Case-sensitive substring search on title.
///
/// # Endpoint
///
/// `GET /books/search/{title}`
///
/// # Errors
///
/// Returns 404 if no title contains the given text.
pub async fn search_books_handler(
    Path(title): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.search_by_title(&title).await?;
    Ok(to_items(books))
}

/// Exact match on author.
///
/// # Endpoint
///
/// `GET /books/author/{author}`
///
/// # Errors
///
/// Returns 404 if the author has no books.
pub async fn books_by_author_handler(
    Path(author): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.find_by_author(&author).await?;
    Ok(to_items(books))
}
