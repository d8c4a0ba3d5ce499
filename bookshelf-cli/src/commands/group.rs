//! Group command implementation

use crate::GroupKey;
use anyhow::Result;
use bookshelf_core::{Book, BookShelf};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// Print groups with their keys sorted so output is stable
fn print_groups<K>(groups: HashMap<K, Vec<&Book>>, json: bool) -> Result<()>
where
    K: Ord + Display + Serialize,
{
    let groups: BTreeMap<K, Vec<&Book>> = groups.into_iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for (key, books) in &groups {
        println!("{} ({})", key, books.len());
        for book in books {
            println!("  {}", super::book_line(book));
        }
    }
    Ok(())
}

/// Print books grouped by author or publication year
pub fn group(shelf: &BookShelf, by: GroupKey, json: bool) -> Result<()> {
    match by {
        GroupKey::Author => print_groups(shelf.group_by(|b| b.author().to_string()), json),
        GroupKey::Year => print_groups(shelf.group_by_publication_year(), json),
    }
}
