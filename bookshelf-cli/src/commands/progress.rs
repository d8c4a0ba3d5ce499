//! Progress command implementation

use anyhow::Result;
use bookshelf_core::BookShelf;

/// Print the share of books read and still to read
pub fn progress(shelf: &BookShelf, json: bool) -> Result<()> {
    let progress = shelf.progress();

    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
    } else {
        println!("Books:     {}", shelf.len());
        println!("Completed: {}%", progress.completed);
        println!("To read:   {}%", progress.to_read);
    }

    Ok(())
}
