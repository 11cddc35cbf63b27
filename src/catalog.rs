//! Catalog Derivation
//!
//! Filtered and paginated projection of the fetched breed list.
//! Recomputed from state on every change, never stored.

use leptos_pager::PageCursor;

use crate::config::PaginationMode;
use crate::models::Breed;

/// Breed names picked in the filter, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    names: Vec<String>,
}

impl FilterSelection {
    /// Add `name` if absent, remove it if present
    pub fn toggle(&mut self, name: &str) {
        if !self.remove(name) {
            self.names.push(name.to_string());
        }
    }

    /// Returns whether `name` was selected
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// One rendered page of the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub breeds: Vec<Breed>,
    pub page_count: usize,
    /// Breeds matching filter + search before slicing
    pub matched: usize,
}

/// Distinct breed names in first-seen order
pub fn distinct_names(breeds: &[Breed]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for breed in breeds {
        if !names.iter().any(|n| *n == breed.name) {
            names.push(breed.name.clone());
        }
    }
    names
}

/// Selection filter, then case-insensitive name substring search
pub fn filter_breeds(breeds: &[Breed], selection: &FilterSelection, search: &str) -> Vec<Breed> {
    let needle = search.to_lowercase();
    breeds
        .iter()
        .filter(|b| selection.is_empty() || selection.contains(&b.name))
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Build the visible page.
///
/// In client mode the filtered set is sliced by `cursor` and the page count
/// follows the filtered length. In server mode the fetched breeds already are
/// the page, so only filtering applies and `server_total_pages` is reported.
pub fn derive_page(
    breeds: &[Breed],
    selection: &FilterSelection,
    search: &str,
    mode: PaginationMode,
    cursor: PageCursor,
    server_total_pages: usize,
) -> CatalogPage {
    let filtered = filter_breeds(breeds, selection, search);
    let matched = filtered.len();
    match mode {
        PaginationMode::Client => CatalogPage {
            breeds: cursor.slice(&filtered).to_vec(),
            page_count: cursor.page_count(matched),
            matched,
        },
        PaginationMode::Server => CatalogPage {
            breeds: filtered,
            page_count: server_total_pages.max(1),
            matched,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breed(id: u32, name: &str) -> Breed {
        Breed { id, name: name.to_string() }
    }

    fn sample() -> Vec<Breed> {
        vec![
            breed(1, "Beagle"),
            breed(2, "Border Collie"),
            breed(3, "Bernardyn"),
            breed(4, "Husky"),
            breed(5, "Jamnik"),
            breed(6, "Beagle"),
        ]
    }

    fn ids(breeds: &[Breed]) -> Vec<u32> {
        breeds.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = filter_breeds(&sample(), &FilterSelection::default(), "BE");
        assert_eq!(ids(&result), vec![1, 3, 6]);
        for b in &sample() {
            let expected = b.name.to_lowercase().contains("be");
            assert_eq!(result.iter().any(|r| r.id == b.id), expected);
        }
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let result = filter_breeds(&sample(), &FilterSelection::default(), "");
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_selection_restricts_names() {
        let mut selection = FilterSelection::default();
        selection.toggle("Husky");
        selection.toggle("Beagle");
        let result = filter_breeds(&sample(), &selection, "");
        assert_eq!(ids(&result), vec![1, 4, 6]);
        assert!(result.iter().all(|b| selection.contains(&b.name)));
    }

    #[test]
    fn test_selection_and_search_combine() {
        let mut selection = FilterSelection::default();
        selection.toggle("Husky");
        selection.toggle("Jamnik");
        let result = filter_breeds(&sample(), &selection, "jam");
        assert_eq!(ids(&result), vec![5]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = FilterSelection::default();
        selection.toggle("Beagle");
        let before = selection.clone();
        selection.toggle("Husky");
        selection.toggle("Husky");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_selection_keeps_pick_order() {
        let mut selection = FilterSelection::default();
        selection.toggle("Jamnik");
        selection.toggle("Beagle");
        assert_eq!(selection.names(), &["Jamnik".to_string(), "Beagle".to_string()]);
        assert!(selection.remove("Jamnik"));
        assert!(!selection.remove("Jamnik"));
        assert_eq!(selection.names(), &["Beagle".to_string()]);
    }

    #[test]
    fn test_distinct_names_first_seen_order() {
        assert_eq!(
            distinct_names(&sample()),
            vec!["Beagle", "Border Collie", "Bernardyn", "Husky", "Jamnik"]
        );
    }

    #[test]
    fn test_client_page_slices_filtered_set() {
        let cursor = PageCursor::new(2).with_page(1);
        let page = derive_page(&sample(), &FilterSelection::default(), "", PaginationMode::Client, cursor, 0);
        assert_eq!(ids(&page.breeds), vec![3, 4]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.matched, 6);
    }

    #[test]
    fn test_client_page_after_search() {
        let cursor = PageCursor::new(2).with_page(1);
        let page = derive_page(&sample(), &FilterSelection::default(), "be", PaginationMode::Client, cursor, 0);
        assert_eq!(ids(&page.breeds), vec![6]);
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn test_server_page_uses_reported_total() {
        let cursor = PageCursor::new(2).with_page(4);
        let page = derive_page(&sample(), &FilterSelection::default(), "", PaginationMode::Server, cursor, 9);
        assert_eq!(page.breeds.len(), 6);
        assert_eq!(page.page_count, 9);
    }

    #[test]
    fn test_empty_result_has_no_cards() {
        let page = derive_page(&sample(), &FilterSelection::default(), "pudel", PaginationMode::Client, PageCursor::new(4), 0);
        assert!(page.breeds.is_empty());
        assert_eq!(page.matched, 0);
        assert_eq!(page.page_count, 1);
    }
}
