//! Book resource routes.

use crate::api::handlers::{
    books_by_author_handler, count_books_handler, create_book_handler, delete_book_handler,
    get_book_handler, list_books_handler, patch_book_handler, replace_book_handler,
    search_books_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All book routes.
///
/// # Endpoints
///
/// - `GET    /books`                  - List all books
/// - `POST   /books`                  - Create a book
/// - `GET    /books/count`            - Number of books
/// - `GET    /books/search/{title}`   - Substring search on title
/// - `GET    /books/author/{author}`  - Exact match on author
/// - `GET    /books/{id}`             - Fetch a book
/// - `PUT    /books/{id}`             - Replace title and author
/// - `PATCH  /books/{id}`             - Partially update a book
/// - `DELETE /books/{id}`             - Delete a book
///
/// `/books/count` is a static segment and wins over `/books/{id}`.
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route("/books/count", get(count_books_handler))
        .route("/books/search/{title}", get(search_books_handler))
        .route("/books/author/{author}", get(books_by_author_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(replace_book_handler)
                .patch(patch_book_handler)
                .delete(delete_book_handler),
        )
}
