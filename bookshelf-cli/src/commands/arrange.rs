//! Arrange command implementation

use crate::SortKey;
use anyhow::Result;
use bookshelf_core::{Book, BookShelf};
use std::cmp::Ordering;

fn compare(by: SortKey, a: &Book, b: &Book) -> Ordering {
    match by {
        SortKey::Title => Book::natural_order(a, b),
        SortKey::Author => a.author().cmp(b.author()),
        SortKey::Published => a.published_on().cmp(&b.published_on()),
    }
}

/// Print books sorted by the given key
pub fn arrange(shelf: &BookShelf, by: SortKey, reverse: bool, json: bool) -> Result<()> {
    tracing::debug!(?by, reverse, "Arranging shelf");

    let books = if reverse {
        shelf.arrange_by(|a, b| compare(by, a, b).reverse())
    } else {
        shelf.arrange_by(|a, b| compare(by, a, b))
    };

    super::print_books(&books, json)
}
