//! Home Screen
//!
//! Breed catalog: fetch, filter by breed, search by name, paginate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pager::create_pager_signals;
use reactive_stores::Store;

use crate::api;
use crate::catalog::{self, CatalogPage};
use crate::components::{BreedCard, BreedFilter, NavBar, PaginationBar};
use crate::config::PaginationMode;
use crate::context::use_app_context;
use crate::presentation::{LIST_EMPTY_MESSAGE, LIST_ERROR_MESSAGE, LOADING_MESSAGE};
use crate::state::{LoadState, RequestGeneration};
use crate::store::{CatalogState, CatalogStateStoreFields};

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();
    let mode = ctx.config.pagination_mode;
    let client_fetch_size = ctx.config.client_fetch_size;
    let page_sizes = ctx.config.page_size_options.clone();

    let store = Store::new(CatalogState::default());
    let pager = create_pager_signals(ctx.config.default_page_size);
    let generation = RequestGeneration::new();

    // Client mode loads the whole catalog once; server mode refetches on every cursor change
    Effect::new(move |_| {
        let server_cursor = match mode {
            PaginationMode::Server => Some(pager.cursor()),
            PaginationMode::Client => None,
        };
        let ticket = generation.begin();
        let client = ctx.client.clone();
        store.status().set(LoadState::Loading);

        spawn_local(async move {
            let result = match server_cursor {
                Some(cursor) => api::list_breeds(&client, cursor).await,
                None => {
                    api::list_all_breeds(&client, client_fetch_size, || generation.is_current(ticket))
                        .await
                }
            };
            if !generation.is_current(ticket) {
                log::debug!("[HomeScreen] Dropping stale breed response");
                return;
            }
            match result {
                Ok(page) => {
                    log::debug!("[HomeScreen] Loaded {} breeds", page.content.len());
                    store.total_pages().set(page.total_pages);
                    store.breeds().set(page.content);
                    store.status().set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("[HomeScreen] Failed to load breeds: {}", e);
                    store.status().set(LoadState::Failed(LIST_ERROR_MESSAGE.to_string()));
                }
            }
        });
    });

    let breed_names = Memo::new(move |_| store.breeds().with(|breeds| catalog::distinct_names(breeds)));
    let selected = Signal::derive(move || store.selection().with(|s| s.names().to_vec()));

    let visible: Memo<CatalogPage> = Memo::new(move |_| {
        let selection = store.selection().get();
        let search = store.search().get();
        let cursor = pager.cursor();
        let total_pages = store.total_pages().get();
        store
            .breeds()
            .with(|breeds| catalog::derive_page(breeds, &selection, &search, mode, cursor, total_pages))
    });
    let page_count = Signal::derive(move || visible.with(|page| page.page_count));

    // Local filtering changes what page 0 means in client mode
    let reset_client_page = move || {
        if mode == PaginationMode::Client {
            pager.reset_page();
        }
    };

    let on_toggle = move |name: String| {
        store.selection().write().toggle(&name);
        reset_client_page();
    };
    let on_remove = move |name: String| {
        store.selection().write().remove(&name);
        reset_client_page();
    };

    view! {
        <div class="screen">
            <NavBar />
            <main class="home-screen">
                <div class="catalog-controls">
                    <input
                        type="search"
                        class="catalog-search"
                        placeholder="Szukaj rasy..."
                        prop:value=move || store.search().get()
                        on:input=move |ev| {
                            store.search().set(event_target_value(&ev));
                            reset_client_page();
                        }
                    />
                    <BreedFilter
                        names=breed_names
                        selected=selected
                        on_toggle=on_toggle
                        on_remove=on_remove
                    />
                </div>

                {move || match store.status().get() {
                    LoadState::Idle | LoadState::Loading => {
                        view! { <div class="loading">{LOADING_MESSAGE}</div> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! { <p class="error-message">{message}</p> }.into_any()
                    }
                    LoadState::Ready => {
                        let page = visible.get();
                        if page.breeds.is_empty() {
                            view! { <p class="empty-message">{LIST_EMPTY_MESSAGE}</p> }.into_any()
                        } else {
                            view! {
                                <div class="breed-grid">
                                    {page
                                        .breeds
                                        .into_iter()
                                        .map(|breed| view! { <BreedCard breed=breed /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}

                <PaginationBar pager=pager page_count=page_count page_sizes=page_sizes />
            </main>
        </div>
    }
}
