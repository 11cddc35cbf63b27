//! Catalog Screen Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::catalog::FilterSelection;
use crate::models::Breed;
use crate::state::LoadState;

/// Breed list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    pub status: LoadState,
    /// Breeds from the last committed response
    pub breeds: Vec<Breed>,
    /// Page count reported by the server (server pagination only)
    pub total_pages: usize,
    pub selection: FilterSelection,
    pub search: String,
}

