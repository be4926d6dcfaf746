//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::book_service::BookService`] - Book CRUD and search

pub mod services;
