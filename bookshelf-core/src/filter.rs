//! Filters for narrowing shelf queries

use crate::error::{Result, ShelfError};
use crate::types::Book;
use chrono::NaiveDate;

/// A predicate over a single book
///
/// Implement this to plug custom narrowing into
/// [`BookShelf::find_by_title_with`](crate::BookShelf::find_by_title_with).
/// Closures taking `&Book` already implement it.
pub trait BookFilter {
    /// Whether the book passes the filter
    fn apply(&self, book: &Book) -> bool;
}

impl<F> BookFilter for F
where
    F: Fn(&Book) -> bool,
{
    fn apply(&self, book: &Book) -> bool {
        self(book)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    After,
    Before,
}

/// Filter on publication date against a year boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedYearFilter {
    threshold: NaiveDate,
    bound: Bound,
}

impl PublishedYearFilter {
    /// Books published strictly after December 31 of `year`
    pub fn after(year: i32) -> Result<Self> {
        let threshold =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ShelfError::InvalidYear(year))?;
        Ok(Self {
            threshold,
            bound: Bound::After,
        })
    }

    /// Books published strictly before January 1 of `year`
    pub fn before(year: i32) -> Result<Self> {
        let threshold =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ShelfError::InvalidYear(year))?;
        Ok(Self {
            threshold,
            bound: Bound::Before,
        })
    }

    pub fn threshold(&self) -> NaiveDate {
        self.threshold
    }
}

impl BookFilter for PublishedYearFilter {
    fn apply(&self, book: &Book) -> bool {
        match self.bound {
            Bound::After => book.published_on() > self.threshold,
            Bound::Before => book.published_on() < self.threshold,
        }
    }
}

/// Logical AND over an ordered list of filters
///
/// Filters run in the order they were added. An empty composite lets every
/// book through.
#[derive(Default)]
pub struct CompositeFilter {
    filters: Vec<Box<dyn BookFilter>>,
}

impl CompositeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter
    pub fn add_filter(&mut self, filter: impl BookFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Builder form of [`add_filter`](Self::add_filter)
    pub fn with_filter(mut self, filter: impl BookFilter + 'static) -> Self {
        self.add_filter(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl BookFilter for CompositeFilter {
    fn apply(&self, book: &Book) -> bool {
        self.filters.iter().all(|filter| filter.apply(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn book_published(y: i32, m: u32, d: u32) -> Book {
        Book::new(
            "Some Title",
            "Some Author",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_after_threshold_is_december_31() {
        let filter = PublishedYearFilter::after(2007).unwrap();
        assert_eq!(
            filter.threshold(),
            NaiveDate::from_ymd_opt(2007, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_after_filter() {
        let filter = PublishedYearFilter::after(2007).unwrap();
        assert!(filter.apply(&book_published(2008, 8, 1)));
        assert!(!filter.apply(&book_published(2004, 6, 9)));
    }

    #[test]
    fn test_after_filter_boundaries() {
        let filter = PublishedYearFilter::after(2007).unwrap();
        assert!(!filter.apply(&book_published(2007, 12, 31)));
        assert!(filter.apply(&book_published(2008, 1, 1)));
    }

    #[test]
    fn test_before_filter() {
        let filter = PublishedYearFilter::before(2007).unwrap();
        assert!(filter.apply(&book_published(2006, 12, 31)));
        assert!(!filter.apply(&book_published(2007, 1, 1)));
        assert!(!filter.apply(&book_published(2008, 8, 1)));
    }

    #[test]
    fn test_out_of_range_year() {
        assert!(matches!(
            PublishedYearFilter::after(i32::MAX),
            Err(ShelfError::InvalidYear(i32::MAX))
        ));
        assert!(matches!(
            PublishedYearFilter::before(i32::MIN),
            Err(ShelfError::InvalidYear(i32::MIN))
        ));
    }

    #[test]
    fn test_empty_composite_passes_everything() {
        let filter = CompositeFilter::new();
        assert!(filter.is_empty());
        assert!(filter.apply(&book_published(1975, 1, 1)));
    }

    #[test]
    fn test_composite_is_logical_and() {
        let book = book_published(2008, 8, 1);

        let mut filter = CompositeFilter::new();
        filter.add_filter(|_: &Book| false);
        filter.add_filter(|_: &Book| true);
        assert_eq!(filter.len(), 2);
        assert!(!filter.apply(&book));

        let filter = CompositeFilter::new()
            .with_filter(|_: &Book| true)
            .with_filter(|_: &Book| true);
        assert!(filter.apply(&book));
    }

    #[test]
    fn test_composite_runs_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut filter = CompositeFilter::new();
        for i in 0..3 {
            let calls = Rc::clone(&calls);
            filter.add_filter(move |_: &Book| {
                calls.borrow_mut().push(i);
                true
            });
        }

        assert!(filter.apply(&book_published(2008, 8, 1)));
        assert_eq!(*calls.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_composites_nest() {
        let inner = CompositeFilter::new()
            .with_filter(PublishedYearFilter::after(2000).unwrap())
            .with_filter(PublishedYearFilter::before(2010).unwrap());
        let outer = CompositeFilter::new()
            .with_filter(inner)
            .with_filter(|b: &Book| b.author() == "Some Author");

        assert!(outer.apply(&book_published(2004, 6, 9)));
        assert!(!outer.apply(&book_published(1975, 1, 1)));
    }
}
