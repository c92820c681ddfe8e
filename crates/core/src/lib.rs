//! Core library for ArtScope — the collection object model, the ordered
//! fact tables behind the detail panel, query normalization and dispatch,
//! and the museum API client.
//!
//! Everything here is UI-framework-free: the desktop app injects its own
//! state writers as callbacks when it dispatches a query.

pub mod client;
pub mod config;
pub mod facts;
pub mod query;
pub mod types;

pub use client::MuseumClient;
pub use config::ApiConfig;
pub use query::{dispatch_query, QueryError, SearchBackend, SearchQuery};
pub use types::{ObjectRecord, SearchResults};
