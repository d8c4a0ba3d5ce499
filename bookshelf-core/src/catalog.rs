//! Import a bookshelf from a JSON catalog
//!
//! A catalog is a JSON array of entries:
//!
//! ```json
//! [
//!   {
//!     "title": "Effective Java",
//!     "author": "Joshua Bloch",
//!     "published_on": "2008-05-08",
//!     "started_reading_on": "2021-03-01",
//!     "finished_reading_on": "2021-04-01"
//!   }
//! ]
//! ```
//!
//! The reading dates are optional. Catalogs are only ever read; a shelf is
//! never written back.

use crate::error::{Result, ShelfError};
use crate::shelf::BookShelf;
use crate::types::Book;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One catalog entry as it appears on disk
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    title: Option<String>,
    author: Option<String>,
    published_on: Option<NaiveDate>,
    #[serde(default)]
    started_reading_on: Option<NaiveDate>,
    #[serde(default)]
    finished_reading_on: Option<NaiveDate>,
}

impl TryFrom<CatalogEntry> for Book {
    type Error = ShelfError;

    fn try_from(entry: CatalogEntry) -> Result<Self> {
        let mut builder = Book::builder()
            .started_reading_on(entry.started_reading_on)
            .finished_reading_on(entry.finished_reading_on);
        if let Some(title) = entry.title {
            builder = builder.title(title);
        }
        if let Some(author) = entry.author {
            builder = builder.author(author);
        }
        if let Some(published_on) = entry.published_on {
            builder = builder.published_on(published_on);
        }
        builder.build()
    }
}

/// Build a shelf from catalog JSON read from `reader`
pub fn from_reader<R: Read>(reader: R) -> Result<BookShelf> {
    let entries: Vec<CatalogEntry> = serde_json::from_reader(reader)?;
    into_shelf(entries)
}

/// Build a shelf from a catalog JSON string
pub fn from_str(json: &str) -> Result<BookShelf> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    into_shelf(entries)
}

/// Load a catalog file
pub fn load(path: impl AsRef<Path>) -> Result<BookShelf> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Loading catalog");
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

fn into_shelf(entries: Vec<CatalogEntry>) -> Result<BookShelf> {
    let books = entries
        .into_iter()
        .map(Book::try_from)
        .collect::<Result<Vec<_>>>()?;

    let mut shelf = BookShelf::new();
    shelf.add(books);
    Ok(shelf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let shelf = from_str(
            r#"[
                {"title": "Effective Java", "author": "Joshua Bloch", "published_on": "2008-05-08",
                 "started_reading_on": "2021-03-01", "finished_reading_on": "2021-04-01"},
                {"title": "Code Complete", "author": "Steve McConnel", "published_on": "2004-06-09"}
            ]"#,
        )
        .unwrap();

        assert_eq!(shelf.len(), 2);
        assert_eq!(shelf.books()[0].title(), "Effective Java");
        assert!(shelf.books()[0].is_read());
        assert!(!shelf.books()[1].is_read());
    }

    #[test]
    fn test_empty_catalog() {
        let shelf = from_str("[]").unwrap();
        assert!(shelf.is_empty());
    }

    #[test]
    fn test_missing_author() {
        let err =
            from_str(r#"[{"title": "Anonymous", "published_on": "2000-01-01"}]"#).unwrap_err();
        assert!(matches!(err, ShelfError::MissingField("author")));
    }

    #[test]
    fn test_null_title() {
        let err = from_str(r#"[{"title": null, "author": "A", "published_on": "2000-01-01"}]"#)
            .unwrap_err();
        assert!(matches!(err, ShelfError::MissingField("title")));
    }

    #[test]
    fn test_bad_date() {
        let err = from_str(r#"[{"title": "T", "author": "A", "published_on": "yesterday"}]"#)
            .unwrap_err();
        assert!(matches!(err, ShelfError::Json(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"title": "Clean Code", "author": "Robert C. Martin", "published_on": "2008-01-01"}]"#,
        )
        .unwrap();

        let shelf = load(&path).unwrap();
        assert_eq!(shelf.books()[0].author(), "Robert C. Martin");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ShelfError::Io(_)));
    }
}
