//! # Book API
//!
//! A minimal REST API for managing a list of books, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Book`](domain::entities::Book) entity and repository trait
//! - **Application Layer** ([`application`]) - Book service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_PATH="books.sqlite"   # Optional, this is the default
//! cargo run
//!
//! curl -X POST localhost:3000/books \
//!      -H 'content-type: application/json' \
//!      -d '{"title":"Dune","author":"Frank Herbert"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::BookService;
    pub use crate::domain::entities::{Book, BookChanges, BookPatch, NewBook};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
