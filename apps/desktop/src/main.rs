//! ArtScope Desktop — Dioxus-powered museum collection explorer.

use std::sync::{Arc, Mutex};

use artscope_core::{ApiConfig, MuseumClient};
use dioxus::prelude::*;

mod app;
mod state;
mod search;
mod preview;
mod feature;

use app::App;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_CLIENT: Mutex<Option<Arc<MuseumClient>>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("artscope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Build the API client at startup — store in the Mutex, NOT in the signal
    let config = ApiConfig::load(std::path::Path::new("."));
    if config.api_key.is_none() {
        tracing::warn!(
            "No API key configured — searches will fail until ARTSCOPE_API_KEY or .artscope.toml is set"
        );
    }
    *INITIAL_CLIENT.lock().unwrap() = Some(Arc::new(MuseumClient::new(&config)));

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder, LogicalSize};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((12, 12, 14, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("ArtScope")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(760.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
