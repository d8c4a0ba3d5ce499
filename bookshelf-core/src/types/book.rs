//! The Book type - a single catalog entry

use crate::error::{Result, ShelfError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A book on the shelf
///
/// Title, author and publication date are fixed once the book is created.
/// The reading dates are the only mutable part of a book.
///
/// Equality compares all five fields. Natural ordering only looks at the
/// title, so it is exposed as [`Book::natural_order`] rather than an `Ord`
/// impl that would disagree with `Eq`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Book {
    title: String,
    author: String,
    published_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_reading_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finished_reading_on: Option<NaiveDate>,
}

impl Book {
    /// Create a new, unread book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_on,
            started_reading_on: None,
            finished_reading_on: None,
        }
    }

    /// Start building a book whose fields may not all be known yet
    pub fn builder() -> BookBuilder {
        BookBuilder::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    /// Calendar year of publication
    pub fn publication_year(&self) -> i32 {
        self.published_on.year()
    }

    pub fn started_reading_on(&self) -> Option<NaiveDate> {
        self.started_reading_on
    }

    pub fn finished_reading_on(&self) -> Option<NaiveDate> {
        self.finished_reading_on
    }

    /// Record the day reading started. Overwrites any earlier value.
    pub fn start_reading(&mut self, on: NaiveDate) {
        self.started_reading_on = Some(on);
    }

    /// Record the day reading finished. Not checked against the start date.
    pub fn finish_reading(&mut self, on: NaiveDate) {
        self.finished_reading_on = Some(on);
    }

    /// A book counts as read once both reading dates are set
    pub fn is_read(&self) -> bool {
        self.started_reading_on.is_some() && self.finished_reading_on.is_some()
    }

    /// Natural shelf ordering: lexicographic by title
    pub fn natural_order(a: &Book, b: &Book) -> Ordering {
        a.title.cmp(&b.title)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{title='{}', author='{}', publishedOn={}}}",
            self.title, self.author, self.published_on
        )
    }
}

/// Builder for books assembled from partial data (catalog entries, forms)
///
/// `build` fails fast when a required field is absent.
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    title: Option<String>,
    author: Option<String>,
    published_on: Option<NaiveDate>,
    started_reading_on: Option<NaiveDate>,
    finished_reading_on: Option<NaiveDate>,
}

impl BookBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn published_on(mut self, date: NaiveDate) -> Self {
        self.published_on = Some(date);
        self
    }

    pub fn started_reading_on(mut self, date: Option<NaiveDate>) -> Self {
        self.started_reading_on = date;
        self
    }

    pub fn finished_reading_on(mut self, date: Option<NaiveDate>) -> Self {
        self.finished_reading_on = date;
        self
    }

    /// Build the book, rejecting a missing title, author or publication date
    pub fn build(self) -> Result<Book> {
        let title = self.title.ok_or(ShelfError::MissingField("title"))?;
        let author = self.author.ok_or(ShelfError::MissingField("author"))?;
        let published_on = self
            .published_on
            .ok_or(ShelfError::MissingField("published_on"))?;

        Ok(Book {
            title,
            author,
            published_on,
            started_reading_on: self.started_reading_on,
            finished_reading_on: self.finished_reading_on,
        })
    }
}
