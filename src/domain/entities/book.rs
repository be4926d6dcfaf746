//! Domain entity representing a book.

use serde::Serialize;
use uuid::Uuid;

/// A book stored in the catalogue.
///
/// `id` is assigned by the server on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: Uuid, title: String, author: String) -> Self {
        Self { id, title, author }
    }

    /// Builds a book with a freshly generated v4 identifier.
    pub fn create(new_book: NewBook) -> Self {
        Self::new(Uuid::new_v4(), new_book.title, new_book.author)
    }

    /// Returns the same book with `title` and `author` replaced.
    pub fn replace(self, changes: BookChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title,
            author: changes.author,
        }
    }
}

/// Input data for creating a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

/// Full replacement of a book's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub title: String,
    pub author: String,
}

impl From<Book> for BookChanges {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
        }
    }
}

/// Partial update of a book.
///
/// A field set to `Some` overwrites the stored value; `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookPatch {
    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    /// Merges the patch into `book`. The identifier is never modified.
    pub fn apply(self, book: Book) -> Book {
        Book {
            id: book.id,
            title: self.title.unwrap_or(book.title),
            author: self.author.unwrap_or(book.author),
        }
    }
}
