//! Core domain entities.
//!
//! - [`Book`] - A stored book
//! - [`NewBook`] - Input for creating a book
//! - [`BookChanges`] - Full replacement of mutable fields
//! - [`BookPatch`] - Partial update with explicit merge semantics

pub mod book;

pub use book::{Book, BookChanges, BookPatch, NewBook};
