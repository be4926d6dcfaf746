//! Book management service.

use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Book, BookChanges, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Service for creating, reading, updating and deleting books.
///
/// Converts repository lookup misses into [`AppError::NotFound`] so that
/// handlers only have to forward errors.
pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every stored book. An empty catalogue is not an error.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book(&self, id: Uuid) -> Result<Book, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    /// Creates a book with a server-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = self.repository.insert(Book::create(new_book)).await?;

        tracing::info!(id = %book.id, title = %book.title, "Book created");

        Ok(book)
    }

    /// Replaces `title` and `author` of an existing book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_book(&self, id: Uuid, changes: BookChanges) -> Result<Book, AppError> {
        let book = self.repository.update(id, changes).await?;

        tracing::info!(id = %book.id, "Book replaced");

        Ok(book)
    }

    /// Applies a partial update to an existing book.
    ///
    /// Fields present in `patch` overwrite the stored ones; absent fields are
    /// kept. An empty patch returns the stored book without writing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn patch_book(&self, id: Uuid, patch: BookPatch) -> Result<Book, AppError> {
        let current = self.get_book(id).await?;

        if patch.is_empty() {
            return Ok(current);
        }

        let merged = patch.apply(current);
        let book = self.repository.update(id, merged.into()).await?;

        tracing::info!(id = %book.id, "Book patched");

        Ok(book)
    }

    /// Deletes a book and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, id: Uuid) -> Result<Book, AppError> {
        let book = self.repository.delete(id).await?;

        tracing::info!(id = %book.id, "Book deleted");

        Ok(book)
    }

    /// Number of stored books.
    pub async fn count_books(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Books whose title contains `title` (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<Book>, AppError> {
        let books = self.repository.find_by_title_contains(title).await?;

        if books.is_empty() {
            return Err(AppError::not_found(
                "No books match the title",
                json!({ "title": title }),
            ));
        }

        Ok(books)
    }

    /// Books written by exactly `author`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        let books = self.repository.find_by_author(author).await?;

        if books.is_empty() {
            return Err(AppError::not_found(
                "No books by this author",
                json!({ "author": author }),
            ));
        }

        Ok(books)
    }
}
