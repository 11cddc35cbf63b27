//! View State
//!
//! Load states for the list and detail screens, plus the request
//! generation guard that drops responses superseded by a newer fetch.

use leptos::prelude::*;

use crate::api::FetchError;
use crate::models::Dog;
use crate::presentation::DETAIL_ERROR_MESSAGE;

/// Breed list lifecycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// User-facing message
    Failed(String),
}

/// Dog detail lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(Dog),
    NotFound,
    /// User-facing message
    Failed(String),
}

impl DetailState {
    pub fn from_result(result: Result<Option<Dog>, FetchError>) -> Self {
        match result {
            Ok(Some(dog)) => Self::Ready(dog),
            Ok(None) => Self::NotFound,
            Err(_) => Self::Failed(DETAIL_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Ticket handed out by [`RequestGeneration::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter owned by a view and read by its in-flight fetches.
/// Only the response holding the latest ticket may be committed; after the
/// view is disposed no ticket is current.
#[derive(Clone, Copy)]
pub struct RequestGeneration {
    latest: StoredValue<u64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self {
            latest: StoredValue::new(0),
        }
    }

    /// Start a new request; every earlier ticket becomes stale
    pub fn begin(&self) -> RequestTicket {
        self.latest.update_value(|v| *v += 1);
        RequestTicket(self.latest.get_value())
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.try_get_value() == Some(ticket.0)
    }
}
