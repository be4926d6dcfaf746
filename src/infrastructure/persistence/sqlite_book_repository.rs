//! SQLite implementation of the book repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::domain::entities::{Book, BookChanges};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Raw `books` row. Ids are stored as hyphenated UUID text.
#[derive(Debug, FromRow)]
struct BookRow {
    id: String,
    title: String,
    author: String,
}

impl TryFrom<BookRow> for Book {
    type Error = AppError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|e| {
            tracing::error!(id = %row.id, error = %e, "Corrupt book id in storage");
            AppError::internal("Database error", json!({}))
        })?;

        Ok(Book::new(id, row.title, row.author))
    }
}

fn into_books(rows: Vec<BookRow>) -> Result<Vec<Book>, AppError> {
    rows.into_iter().map(Book::try_from).collect()
}

/// SQLite repository for the `books` table.
///
/// Holds a clone of the shared pool; cloning is cheap.
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    /// Creates a new repository on top of an already migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>("SELECT id, title, author FROM books WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Book::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        let rows =
            sqlx::query_as::<_, BookRow>("SELECT id, title, author FROM books ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        into_books(rows)
    }

    async fn find_by_title_contains(&self, substring: &str) -> Result<Vec<Book>, AppError> {
        // instr() is case-sensitive, unlike LIKE.
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author
            FROM books
            WHERE instr(title, ?) > 0
            ORDER BY rowid
            "#,
        )
        .bind(substring)
        .fetch_all(&self.pool)
        .await?;

        into_books(rows)
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author
            FROM books
            WHERE author = ?
            ORDER BY rowid
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        into_books(rows)
    }

    async fn insert(&self, book: Book) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (id, title, author)
            VALUES (?, ?, ?)
            RETURNING id, title, author
            "#,
        )
        .bind(book.id.to_string())
        .bind(&book.title)
        .bind(&book.author)
        .fetch_one(&self.pool)
        .await?;

        Book::try_from(row)
    }

    async fn update(&self, id: Uuid, changes: BookChanges) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title  = ?,
                author = ?
            WHERE id = ?
            RETURNING id, title, author
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.author)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Book::try_from)
            .transpose()?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    async fn delete(&self, id: Uuid) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            "DELETE FROM books WHERE id = ? RETURNING id, title, author",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Book::try_from)
            .transpose()?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
