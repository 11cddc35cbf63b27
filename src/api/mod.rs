//! Shelter API Bindings
//!
//! HTTP data client and typed wrappers for the catalog endpoints.

mod breeds;
mod client;
mod credentials;
mod dogs;
mod error;
mod transport;

pub use breeds::*;
pub use client::*;
pub use credentials::*;
pub use dogs::*;
pub use error::*;
