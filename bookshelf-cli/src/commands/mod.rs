//! CLI command implementations

mod arrange;
mod find;
mod group;
mod list;
mod progress;

pub use arrange::arrange;
pub use find::find;
pub use group::group;
pub use list::list;
pub use progress::progress;

use anyhow::{Context, Result};
use bookshelf_core::{catalog, Book, BookShelf};

/// Load the shelf from the catalog file
pub fn load_shelf(path: Option<&str>) -> Result<BookShelf> {
    let path = path.context("No catalog given; pass --catalog or set BOOKSHELF_CATALOG")?;
    let shelf =
        catalog::load(path).with_context(|| format!("Failed to load catalog: {}", path))?;
    tracing::info!(books = shelf.len(), "Loaded catalog {}", path);
    Ok(shelf)
}

/// One line of human-readable output for a book
fn book_line(book: &Book) -> String {
    let mut line = format!(
        "{} by {} ({})",
        book.title(),
        book.author(),
        book.published_on()
    );
    if book.is_read() {
        line.push_str(" [read]");
    }
    line
}

/// Print a sequence of books as lines or a JSON array
fn print_books(books: &[&Book], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
    } else if books.is_empty() {
        println!("No books found");
    } else {
        for book in books {
            println!("{}", book_line(book));
        }
    }
    Ok(())
}
