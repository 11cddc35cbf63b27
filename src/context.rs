//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, LocalStorageCredentials};
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub client: ApiClient,
    pub config: AppConfig,
}

impl AppContext {
    /// Client authenticated from localStorage under `config.token_key`
    pub fn new(config: AppConfig) -> Self {
        let credentials = Arc::new(LocalStorageCredentials::new(config.token_key.clone()));
        Self {
            client: ApiClient::new(config.api_host.clone(), credentials),
            config,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
