//! The bookshelf - an insertion-ordered collection of books

use crate::filter::BookFilter;
use crate::types::{Book, Progress};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// An in-memory collection of books
///
/// Books are kept in the order they were added. Queries such as
/// [`arrange`](Self::arrange) return new sequences of references and never
/// reorder the shelf itself.
///
/// The stored books are only handed out as a shared slice, so callers cannot
/// push, remove or reorder through it:
///
/// ```compile_fail
/// use bookshelf_core::{Book, BookShelf};
/// use chrono::NaiveDate;
///
/// let shelf = BookShelf::new();
/// let book = Book::new("Clean Code", "Robert C. Martin", NaiveDate::from_ymd_opt(2008, 1, 1).unwrap());
/// shelf.books().push(book);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookShelf {
    books: Vec<Book>,
}

impl BookShelf {
    /// Create an empty shelf
    pub fn new() -> Self {
        Self::default()
    }

    /// Append books to the end of the shelf, keeping their order
    pub fn add<I>(&mut self, books: I)
    where
        I: IntoIterator<Item = Book>,
    {
        let before = self.books.len();
        self.books.extend(books);
        tracing::debug!(
            added = self.books.len() - before,
            total = self.books.len(),
            "Added books to shelf"
        );
    }

    /// Read-only view of the books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Get the book at a shelf position
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Mutable access to a shelved book, e.g. to record reading dates.
    ///
    /// A `&mut Book` can only change the reading dates; the shelf order
    /// stays as it is.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Iterate mutably over the books in shelf order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Book> {
        self.books.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books sorted by title
    pub fn arrange(&self) -> Vec<&Book> {
        self.arrange_by(Book::natural_order)
    }

    /// Books sorted by a caller-supplied comparator.
    ///
    /// The sort is stable: books that compare equal keep their shelf order.
    pub fn arrange_by<F>(&self, mut compare: F) -> Vec<&Book>
    where
        F: FnMut(&Book, &Book) -> Ordering,
    {
        let mut arranged: Vec<&Book> = self.books.iter().collect();
        arranged.sort_by(|a, b| compare(*a, *b));
        arranged
    }

    /// Group books by a derived key.
    ///
    /// Each group lists its books in shelf order. Key order is unspecified.
    pub fn group_by<K, F>(&self, key: F) -> HashMap<K, Vec<&Book>>
    where
        K: Eq + Hash,
        F: Fn(&Book) -> K,
    {
        let mut groups: HashMap<K, Vec<&Book>> = HashMap::new();
        for book in &self.books {
            groups.entry(key(book)).or_default().push(book);
        }
        groups
    }

    /// Group books by the year they were published
    pub fn group_by_publication_year(&self) -> HashMap<i32, Vec<&Book>> {
        self.group_by(Book::publication_year)
    }

    /// Share of books read versus still to read.
    ///
    /// An empty shelf reports 0% for both rather than failing.
    pub fn progress(&self) -> Progress {
        let read = self.books.iter().filter(|b| b.is_read()).count();
        let progress = Progress::from_counts(read, self.books.len());
        tracing::debug!(read, total = self.books.len(), ?progress, "Computed progress");
        progress
    }

    /// Books whose title contains `query`, ignoring case
    pub fn find_by_title(&self, query: &str) -> Vec<&Book> {
        self.find_by_title_with(query, &|_: &Book| true)
    }

    /// Books whose title contains `query`, ignoring case, that also pass `filter`
    pub fn find_by_title_with(&self, query: &str, filter: &dyn BookFilter) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title().to_lowercase().contains(&query))
            .filter(|b| filter.apply(b))
            .collect()
    }
}

impl Extend<Book> for BookShelf {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl FromIterator<Book> for BookShelf {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut shelf = Self::new();
        shelf.add(iter);
        shelf
    }
}

impl<'a> IntoIterator for &'a BookShelf {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl<'a> IntoIterator for &'a mut BookShelf {
    type Item = &'a mut Book;
    type IntoIter = std::slice::IterMut<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter_mut()
    }
}
