//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`db`] - SQLite pool creation and schema migrations
//! - [`persistence`] - SQLite repository implementations

pub mod db;
pub mod persistence;
