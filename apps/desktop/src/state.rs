//! Global application state using Dioxus signals.

use std::sync::Arc;

use artscope_core::types::{ObjectRecord, SearchResults};
use artscope_core::MuseumClient;
use dioxus::prelude::*;

/// API client — set once on first render from the pre-runtime Mutex
pub static CLIENT: GlobalSignal<Option<Arc<MuseumClient>>> = Signal::global(|| None);

/// Current keyword in the search input
pub static QUERY: GlobalSignal<String> = Signal::global(|| String::new());

/// True while a query dispatch is in flight
pub static IS_LOADING: GlobalSignal<bool> = Signal::global(|| false);

/// Result set of the most recent search
pub static SEARCH_RESULTS: GlobalSignal<Option<SearchResults>> = Signal::global(|| None);

/// Object currently featured in the detail panel
pub static FEATURED_RESULT: GlobalSignal<Option<ObjectRecord>> = Signal::global(|| None);
