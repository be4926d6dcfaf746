//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! - [`SqliteBookRepository`] - Book storage and retrieval

pub mod sqlite_book_repository;

pub use sqlite_book_repository::SqliteBookRepository;
