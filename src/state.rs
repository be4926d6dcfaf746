//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::BookService;
use crate::infrastructure::persistence::SqliteBookRepository;

/// Per-process state. Built once at startup and cloned into each request.
///
/// The pool is the only long-lived resource; it is passed in explicitly
/// rather than held in a global.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub book_service: Arc<BookService<SqliteBookRepository>>,
}

impl AppState {
    /// Wires the repository and service on top of a migrated pool.
    pub fn new(db: SqlitePool) -> Self {
        let book_repository = Arc::new(SqliteBookRepository::new(db.clone()));
        let book_service = Arc::new(BookService::new(book_repository));

        Self { db, book_service }
    }
}
