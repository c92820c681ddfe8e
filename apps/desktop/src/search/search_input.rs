//! Hero search input component with debounced keyword dispatch.

use dioxus::prelude::*;

use artscope_core::{dispatch_query, SearchQuery};
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let mut debounce_gen = use_signal(|| 0u64);
    let query = QUERY.read();
    let has_query = !query.trim().is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            // Label
            span { class: "search-label", "SEARCH" }

            // Input row
            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                // Input
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search the collection…",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        *QUERY.write() = value.clone();

                        if value.trim().is_empty() {
                            *SEARCH_RESULTS.write() = None;
                            *FEATURED_RESULT.write() = None;
                            return;
                        }

                        // Debounce: increment generation, spawn delayed dispatch
                        let gen = *debounce_gen.read() + 1;
                        *debounce_gen.write() = gen;

                        spawn(async move {
                            tokio::time::sleep(std::time::Duration::from_millis(250)).await;
                            if *debounce_gen.read() == gen {
                                run_keyword_search(&value).await;
                            }
                        });
                    },
                }

                // Clear button
                if has_query {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            *QUERY.write() = String::new();
                            *SEARCH_RESULTS.write() = None;
                            *FEATURED_RESULT.write() = None;
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

/// Dispatch a keyword query against the collection API and update global state.
async fn run_keyword_search(keyword: &str) {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return;
    }

    let client = match CLIENT.read().as_ref() {
        Some(c) => c.clone(),
        None => return,
    };

    let query = SearchQuery::new("keyword", trimmed);
    dispatch_query(
        client.as_ref(),
        &query,
        |loading| *IS_LOADING.write() = loading,
        |results| *SEARCH_RESULTS.write() = Some(results),
    )
    .await;
}
