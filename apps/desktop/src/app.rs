//! Root application component — search-over-split layout.

use dioxus::prelude::*;

use crate::feature::FeaturePanel;
use crate::preview::PreviewSidebar;
use crate::search::SearchPanel;
use crate::state::*;
use crate::INITIAL_CLIENT;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Take the pre-runtime client into the signal on first render
    use_hook(|| {
        if let Some(client) = INITIAL_CLIENT.lock().unwrap().take() {
            *CLIENT.write() = Some(client);
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Titlebar (drag region)
            div {
                class: "titlebar",
                span { class: "titlebar-title", "ArtScope" }
            }

            // Main content area
            div {
                class: "content-area",

                // Search bar (spans full width of content area)
                SearchPanel {}

                // Split: results sidebar + featured object
                div {
                    class: "split-panel",

                    div {
                        class: "sidebar-panel",
                        PreviewSidebar {}
                    }

                    FeaturePanel {}
                }
            }

            // Status bar
            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let is_loading = IS_LOADING.read();
    let results = SEARCH_RESULTS.read();

    let total = results.as_ref().map(|set| set.info.totalrecords).unwrap_or(0);

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-source", "Harvard Art Museums" }
            if results.is_some() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-results", "{total} objects" }
            }
            if *is_loading {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-loading", "Loading…" }
            }
        }
    }
}
