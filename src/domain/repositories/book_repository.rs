//! Repository trait for book storage.

use crate::domain::entities::{Book, BookChanges};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage accessor for the `books` table.
///
/// Every method is atomic at the single-row level. No multi-row transaction
/// guarantees are provided.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteBookRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_book.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Point lookup by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError>;

    /// Returns every stored book in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Book>, AppError>;

    /// Books whose title contains `substring` (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_title_contains(&self, substring: &str) -> Result<Vec<Book>, AppError>;

    /// Books whose author equals `author` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError>;

    /// Inserts a new row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including an id
    /// that is already taken.
    async fn insert(&self, book: Book) -> Result<Book, AppError>;

    /// Overwrites `title` and `author` of an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: Uuid, changes: BookChanges) -> Result<Book, AppError>;

    /// Removes a row and returns what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<Book, AppError>;

    /// Number of stored books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
