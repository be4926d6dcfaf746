//! DTOs for book endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Book, BookChanges, BookPatch, NewBook};

/// JSON representation of a book.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookItem {
    pub id: Uuid,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookItem {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}

/// Request body for `POST /books` and `PUT /books/{id}`.
///
/// Unknown fields, including a client-supplied `id`, are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct BookRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

impl From<BookRequest> for NewBook {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
        }
    }
}

impl From<BookRequest> for BookChanges {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
        }
    }
}

/// Request body for `PATCH /books/{id}`.
///
/// All fields are optional; only provided fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchBookRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: Option<String>,
}

impl From<PatchBookRequest> for BookPatch {
    fn from(req: PatchBookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
        }
    }
}
