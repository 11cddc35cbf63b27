//! Shelter Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod models;
mod presentation;
mod state;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    mount_to_body(App);
}
