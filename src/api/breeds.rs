//! Breed listing endpoint

use leptos_pager::PageCursor;

use super::client::ApiClient;
use super::error::FetchError;
use crate::models::{Breed, Page};

/// Upper bound on pages requested when collecting the whole catalog
const MAX_CATALOG_PAGES: usize = 100;

/// `GET /breeds?page={p}&size={s}`
pub async fn list_breeds(client: &ApiClient, cursor: PageCursor) -> Result<Page<Breed>, FetchError> {
    client.get_json("/breeds", &breeds_query(cursor)).await
}

/// Whole catalog: page 0, then every page the envelope's `totalPages` announces.
/// Stops early once `still_wanted` turns false; the caller drops that result.
pub async fn list_all_breeds(
    client: &ApiClient,
    page_size: usize,
    still_wanted: impl Fn() -> bool,
) -> Result<Page<Breed>, FetchError> {
    let first = PageCursor::new(page_size);
    let mut catalog = list_breeds(client, first).await?;

    for cursor in remaining_cursors(first, catalog.total_pages) {
        if !still_wanted() {
            break;
        }
        let next = list_breeds(client, cursor).await?;
        if !append_page(&mut catalog, next) {
            log::warn!("[API] Page {} of breeds came back empty, stopping", cursor.page);
            break;
        }
    }
    Ok(catalog)
}

fn breeds_query(cursor: PageCursor) -> Vec<(&'static str, String)> {
    vec![
        ("page", cursor.page.to_string()),
        ("size", cursor.page_size.to_string()),
    ]
}

/// Cursors for the pages after `first`, capped at `MAX_CATALOG_PAGES`
fn remaining_cursors(first: PageCursor, total_pages: usize) -> Vec<PageCursor> {
    if total_pages > MAX_CATALOG_PAGES {
        log::warn!(
            "[API] Catalog reports {} pages, loading only the first {}",
            total_pages,
            MAX_CATALOG_PAGES
        );
    }
    let last = total_pages.min(MAX_CATALOG_PAGES);
    (first.page + 1..last).map(|page| first.with_page(page)).collect()
}

/// Append `next` to `catalog`; false when `next` had no breeds
fn append_page(catalog: &mut Page<Breed>, next: Page<Breed>) -> bool {
    if next.content.is_empty() {
        return false;
    }
    catalog.content.extend(next.content);
    true
}
