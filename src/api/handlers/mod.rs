//! HTTP request handlers for API endpoints.

pub mod books;
pub mod health;

pub use books::{
    books_by_author_handler, count_books_handler, create_book_handler, delete_book_handler,
    get_book_handler, list_books_handler, patch_book_handler, replace_book_handler,
    search_books_handler,
};
pub use health::health_handler;
