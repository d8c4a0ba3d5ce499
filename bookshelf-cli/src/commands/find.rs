//! Find command implementation

use anyhow::{Context, Result};
use bookshelf_core::{BookShelf, CompositeFilter, PublishedYearFilter};

/// Build the filter for the optional year bounds
fn year_filter(after: Option<i32>, before: Option<i32>) -> Result<CompositeFilter> {
    let mut filter = CompositeFilter::new();
    if let Some(year) = after {
        filter.add_filter(
            PublishedYearFilter::after(year).with_context(|| format!("Invalid --after {}", year))?,
        );
    }
    if let Some(year) = before {
        filter.add_filter(
            PublishedYearFilter::before(year)
                .with_context(|| format!("Invalid --before {}", year))?,
        );
    }
    Ok(filter)
}

/// Print books whose title matches `query` within the year bounds
pub fn find(
    shelf: &BookShelf,
    query: &str,
    after: Option<i32>,
    before: Option<i32>,
    json: bool,
) -> Result<()> {
    let filter = year_filter(after, before)?;
    tracing::debug!(query, filters = filter.len(), "Searching shelf");

    let books = shelf.find_by_title_with(query, &filter);
    super::print_books(&books, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_counts_bounds() {
        assert!(year_filter(None, None).unwrap().is_empty());
        assert_eq!(year_filter(Some(2000), None).unwrap().len(), 1);
        assert_eq!(year_filter(Some(2000), Some(2010)).unwrap().len(), 2);
    }

    #[test]
    fn test_year_filter_rejects_huge_year() {
        assert!(year_filter(Some(i32::MAX), None).is_err());
    }
}
