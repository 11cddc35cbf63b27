//! Dog Details Screen
//!
//! Fetches one dog by the route id and renders its profile.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::NavBar;
use crate::context::use_app_context;
use crate::models::Dog;
use crate::presentation::{
    age_label, image_data_url, sex_label, weight_label, yes_no, DETAIL_NOT_FOUND_MESSAGE,
    NO_PHOTO_MESSAGE,
};
use crate::state::{DetailState, RequestGeneration};

/// Route id as a dog id; anything non-numeric is treated as missing
fn parse_dog_id(raw: Option<String>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[component]
pub fn DogDetails() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let dog_id = Memo::new(move |_| parse_dog_id(params.read().get("id")));

    let (state, set_state) = signal(DetailState::Loading);
    let generation = RequestGeneration::new();

    // Refetch on id change; only the newest request may commit
    Effect::new(move |_| {
        let id = dog_id.get();
        let ticket = generation.begin();
        let Some(id) = id else {
            log::warn!("[DogDetails] Invalid dog id in route");
            set_state.set(DetailState::NotFound);
            return;
        };

        set_state.set(DetailState::Loading);
        let client = ctx.client.clone();
        spawn_local(async move {
            let result = api::get_dog(&client, id).await;
            if let Err(e) = &result {
                log::error!("[DogDetails] Failed to load dog {}: {}", id, e);
            }
            if generation.is_current(ticket) {
                set_state.set(DetailState::from_result(result));
            } else {
                log::debug!("[DogDetails] Dropping stale response for dog {}", id);
            }
        });
    });

    view! {
        <div class="screen">
            <NavBar />
            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="detail-status">
                        <div class="spinner"></div>
                    </div>
                }.into_any(),
                DetailState::Failed(message) => view! {
                    <div class="detail-status">
                        <p class="error-message">{message}</p>
                    </div>
                }.into_any(),
                DetailState::NotFound => view! {
                    <div class="detail-status">
                        <p>{DETAIL_NOT_FOUND_MESSAGE}</p>
                    </div>
                }.into_any(),
                DetailState::Ready(dog) => view! { <DogProfile dog=dog /> }.into_any(),
            }}
        </div>
    }
}

/// Icon + label + value card
#[component]
fn InfoCard(icon: &'static str, label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="info-card">
            <span class="info-icon">{icon}</span>
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}

#[component]
fn DogProfile(dog: Dog) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let photo = image_data_url(dog.image.as_deref());

    let extra: Vec<(&'static str, &'static str, String)> = vec![
        ("🎨", "Kolor sierści:", dog.color.clone()),
        ("💉", "Zaszczepiony:", yes_no(dog.vaccinated).to_string()),
        ("❤", "Wysterylizowany:", yes_no(dog.sterilized).to_string()),
        ("📍", "Mikrochip:", yes_no(dog.microchipped).to_string()),
        ("🧒", "Przyjazny dzieciom:", yes_no(dog.friendly_with_kids).to_string()),
        ("🐾", "Przyjazny innym zwierzętom:", yes_no(dog.friendly_with_animals).to_string()),
    ];

    view! {
        <div class="detail-container">
            <div class="detail-name">
                <h1>{dog.name.clone()}</h1>
            </div>

            <div class="detail-body">
                <div class="detail-main">
                    <div class="detail-photo">
                        {match photo {
                            Some(src) => view! { <img src=src alt=dog.name.clone() /> }.into_any(),
                            None => view! { <p>{NO_PHOTO_MESSAGE}</p> }.into_any(),
                        }}
                    </div>
                    <div class="detail-facts">
                        <InfoCard icon="🐕" label="Rasa:" value=dog.breed_name.clone() />
                        <InfoCard icon="⚥" label="Płeć:" value=sex_label(dog.sex) />
                        <InfoCard icon="⚖" label="Waga:" value=weight_label(dog.weight) />
                        <InfoCard icon="📏" label="Rozmiar:" value=dog.size.clone() />
                        <InfoCard icon="🎂" label="Wiek:" value=age_label(dog.age) />
                    </div>
                </div>

                <section class="detail-description">
                    <h2>"❤ Opis"</h2>
                    <p>{dog.description.clone()}</p>
                </section>

                <section class="detail-extra">
                    <button
                        class="accordion-header"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| set_expanded.update(|v| *v = !*v)
                    >
                        <span>"Dodatkowe informacje"</span>
                        <span class="accordion-icon">{move || if expanded.get() { "▲" } else { "▼" }}</span>
                    </button>
                    <Show when=move || expanded.get()>
                        <div class="accordion-body">
                            {extra
                                .clone()
                                .into_iter()
                                .map(|(icon, label, value)| view! { <InfoCard icon=icon label=label value=value /> })
                                .collect_view()}
                        </div>
                    </Show>
                </section>

                <div class="detail-actions">
                    <A href="/homescreen" attr:class="back-button">
                        "Powrót do listy"
                    </A>
                </div>
            </div>
        </div>
    }
}
