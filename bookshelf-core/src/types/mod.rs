//! Core value types for the bookshelf

mod book;
mod progress;

pub use book::{Book, BookBuilder};
pub use progress::Progress;
