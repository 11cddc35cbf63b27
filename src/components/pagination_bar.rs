//! Pagination Bar Component

use leptos::prelude::*;
use leptos_pager::{make_on_next, make_on_page_size_change, make_on_prev, PagerSignals};

/// Page sizes to offer, ascending, always including `current`
fn page_size_choices(page_sizes: &[usize], current: usize) -> Vec<usize> {
    let mut choices = page_sizes.to_vec();
    if !choices.contains(&current) {
        choices.push(current);
    }
    choices.sort_unstable();
    choices.dedup();
    choices
}

/// Prev/next controls, page indicator and page-size picker
#[component]
pub fn PaginationBar(
    pager: PagerSignals,
    #[prop(into)] page_count: Signal<usize>,
    page_sizes: Vec<usize>,
) -> impl IntoView {
    let on_prev = make_on_prev(pager);
    let on_next = make_on_next(pager, page_count);
    let on_size = make_on_page_size_change(pager);

    let label = move || format!("Strona {} z {}", pager.page_read.get() + 1, page_count.get());
    let choices = page_size_choices(&page_sizes, pager.page_size_read.get_untracked());

    view! {
        <div class="pagination-bar">
            <button
                class="pagination-btn"
                disabled=move || !pager.cursor().has_prev()
                on:click=on_prev
            >
                "‹"
            </button>
            <span class="pagination-label">{label}</span>
            <button
                class="pagination-btn"
                disabled=move || !pager.cursor().has_next(page_count.get())
                on:click=on_next
            >
                "›"
            </button>
            <label class="pagination-size">
                "Na stronę: "
                // Selection lives on each option: the select has no options yet
                // when its own attributes are applied
                <select on:change=on_size>
                    {choices
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option
                                    value=size.to_string()
                                    prop:selected=move || pager.page_size_read.get() == size
                                >
                                    {size}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
