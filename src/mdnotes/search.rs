//! # Search
//!
//! Linear, case-insensitive substring scans over a store's listing. There is
//! no index: title search walks the listing, content search additionally loads
//! every body. Results keep the store's listing order, and "nothing matched"
//! is an empty `Vec`, never an error.

use crate::error::Result;
use crate::model::NoteEntry;
use crate::store::NoteStore;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Title,
    Content,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Title => write!(f, "title"),
            SearchMode::Content => write!(f, "content"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "t" => Ok(SearchMode::Title),
            "content" | "c" | "body" => Ok(SearchMode::Content),
            other => Err(format!("Unknown search mode: {}", other)),
        }
    }
}

/// Notes whose identifier or stored title contains `query`, ignoring case.
pub fn search_by_title<S: NoteStore + ?Sized>(
    store: &S,
    query: &str,
) -> Result<Vec<NoteEntry>> {
    let needle = query.to_lowercase();
    let hits: Vec<NoteEntry> = store
        .list()?
        .into_iter()
        .filter(|entry| {
            entry.identifier.to_lowercase().contains(&needle)
                || entry.title.to_lowercase().contains(&needle)
        })
        .collect();

    debug!("title search '{}' matched {} notes", query, hits.len());
    Ok(hits)
}

/// Notes whose body contains `query`, ignoring case.
///
/// A note that disappears between listing and reading is skipped.
pub fn search_by_content<S: NoteStore + ?Sized>(
    store: &S,
    query: &str,
) -> Result<Vec<NoteEntry>> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for entry in store.list()? {
        match store.load_body(&entry.identifier)? {
            Some(body) if body.to_lowercase().contains(&needle) => hits.push(entry),
            Some(_) => {}
            None => warn!("note {} vanished during search", entry.identifier),
        }
    }

    debug!("content search '{}' matched {} notes", query, hits.len());
    Ok(hits)
}

pub fn search<S: NoteStore + ?Sized>(
    store: &S,
    mode: SearchMode,
    query: &str,
) -> Result<Vec<NoteEntry>> {
    match mode {
        SearchMode::Title => search_by_title(store, query),
        SearchMode::Content => search_by_content(store, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BackendKind;
    use crate::test_utils::TestEnv;

    fn ids(entries: Vec<NoteEntry>) -> Vec<String> {
        entries.into_iter().map(|e| e.identifier).collect()
    }

    fn seeded(kind: BackendKind) -> (TestEnv, Box<dyn NoteStore>) {
        let env = TestEnv::new();
        let mut store = env.store(kind);
        store.create("Meeting Notes", "discuss roadmap").unwrap();
        store.create("Grocery List", "buy milk").unwrap();
        (env, store)
    }

    #[test]
    fn title_search_is_case_insensitive() {
        for kind in [BackendKind::Flat, BackendKind::Aggregate] {
            let (_env, store) = seeded(kind);
            assert_eq!(
                ids(search_by_title(&store, "meeting").unwrap()),
                vec!["Meeting_Notes"]
            );
        }
    }

    #[test]
    fn content_search_scans_bodies() {
        for kind in [BackendKind::Flat, BackendKind::Aggregate] {
            let (_env, store) = seeded(kind);
            assert_eq!(
                ids(search_by_content(&store, "MILK").unwrap()),
                vec!["Grocery_List"]
            );
        }
    }

    #[test]
    fn no_match_is_empty_not_error() {
        for kind in [BackendKind::Flat, BackendKind::Aggregate] {
            let (_env, store) = seeded(kind);
            assert!(search_by_content(&store, "xyz").unwrap().is_empty());
            assert!(search_by_title(&store, "xyz").unwrap().is_empty());
        }
    }

    #[test]
    fn title_search_matches_stored_title_with_spaces() {
        let (_env, store) = seeded(BackendKind::Aggregate);
        assert_eq!(
            ids(search(&store, SearchMode::Title, "grocery list").unwrap()),
            vec!["Grocery_List"]
        );
    }

    #[test]
    fn title_search_covers_suffixed_notes() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Flat);
        store.create("Plan", "a").unwrap();
        store.create("Plan", "b").unwrap();
        assert_eq!(
            ids(search_by_title(&store, "plan").unwrap()),
            vec!["Plan", "Plan_1"]
        );
    }

    #[test]
    fn search_on_empty_store_is_empty() {
        let env = TestEnv::new();
        let store = env.store(BackendKind::Flat);
        assert!(search(&store, SearchMode::Content, "x").unwrap().is_empty());
    }

    #[test]
    fn parses_modes() {
        assert_eq!("title".parse::<SearchMode>().unwrap(), SearchMode::Title);
        assert_eq!("Content".parse::<SearchMode>().unwrap(), SearchMode::Content);
        assert!("tags".parse::<SearchMode>().is_err());
    }
}
