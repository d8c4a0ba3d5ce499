//! List command implementation

use anyhow::Result;
use bookshelf_core::BookShelf;

/// List books in shelf order
pub fn list(shelf: &BookShelf, json: bool) -> Result<()> {
    let books: Vec<_> = shelf.iter().collect();
    super::print_books(&books, json)
}
