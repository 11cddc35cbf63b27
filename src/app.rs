//! Shelter Frontend App
//!
//! Router and theme root.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{DogDetails, HomeScreen};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!(
        "[APP] API host {}, {} pagination",
        config.api_host,
        config.pagination_mode
    );

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <div class="app-root" style=theme::root_style()>
                <Routes fallback=|| view! { <p class="not-found">"Nie znaleziono strony."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/homescreen" /> } />
                    <Route path=path!("/homescreen") view=HomeScreen />
                    <Route path=path!("/breed/:id") view=DogDetails />
                </Routes>
            </div>
        </Router>
    }
}
