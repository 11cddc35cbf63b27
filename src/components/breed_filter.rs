//! Breed Filter Component
//!
//! Multi-select checkbox list of breed names with removable chips
//! for the current selection.

use leptos::prelude::*;

/// Breed multi-select
///
/// Props:
/// - names: distinct breed names to offer
/// - selected: currently selected names, in pick order
/// - on_toggle: called with a name when its checkbox flips
/// - on_remove: called with a name when its chip is dismissed
#[component]
pub fn BreedFilter(
    #[prop(into)] names: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="breed-filter">
            <div class="breed-filter-chips">
                <For
                    each=move || selected.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let name_for_remove = name.clone();
                        view! {
                            <span class="chip">
                                <span class="chip-label">{name}</span>
                                <button
                                    class="chip-remove"
                                    title="Usuń"
                                    on:click=move |_| on_remove.run(name_for_remove.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <button class="breed-filter-toggle" on:click=move |_| set_open.update(|v| *v = !*v)>
                {move || if open.get() { "Ukryj rasy ▲" } else { "Filtruj rasy ▼" }}
            </button>

            <Show when=move || open.get()>
                <div class="breed-filter-options">
                    <For
                        each=move || names.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let name_for_check = name.clone();
                            let name_for_toggle = name.clone();
                            let is_checked = move || selected.with(|s| s.contains(&name_for_check));
                            view! {
                                <label class="breed-filter-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=is_checked
                                        on:change=move |_| on_toggle.run(name_for_toggle.clone())
                                    />
                                    <span>{name}</span>
                                </label>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
