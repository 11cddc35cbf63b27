//! Breed Card Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Breed;

pub fn detail_href(id: u32) -> String {
    format!("/breed/{id}")
}

/// One catalog entry linking to its detail page
#[component]
pub fn BreedCard(breed: Breed) -> impl IntoView {
    view! {
        <A href=detail_href(breed.id) attr:class="breed-card">
            <div class="breed-card-icon">"🐕"</div>
            <div class="breed-card-name" title=breed.name.clone()>{breed.name.clone()}</div>
        </A>
    }
}
