//! Navigation Bar Component
//!
//! Fixed title bar shown on every screen.

use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed top bar plus a spacer so content starts below it
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <A href="/homescreen" attr:class="nav-bar-title">
                "Schronisko psów"
            </A>
        </header>
        <div class="nav-bar-spacer"></div>
    }
}
