//! Bookshelf Core Library
//!
//! This crate provides an in-memory personal library: books with reading
//! dates, a shelf that keeps them in insertion order, and queries that sort,
//! group, search and summarise reading progress without reordering the shelf.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod shelf;
pub mod types;

pub use error::{Result, ShelfError};
pub use filter::{BookFilter, CompositeFilter, PublishedYearFilter};
pub use shelf::BookShelf;
pub use types::{Book, BookBuilder, Progress};
