//! Preview sidebar — record list for the current search results.

use dioxus::prelude::*;
use crate::state::*;

/// Results sidebar — click a record to feature it in the detail panel.
#[component]
pub fn PreviewSidebar() -> Element {
    let results = SEARCH_RESULTS.read();
    let featured = FEATURED_RESULT.read();

    let records = match results.as_ref() {
        Some(set) => set.records.as_slice(),
        None => &[],
    };

    if records.is_empty() {
        return rsx! {
            div {
                class: "sidebar-empty",
                span { "Search the collection…" }
            }
        };
    }

    let featured_id = featured.as_ref().map(|record| record.objectid);

    rsx! {
        div {
            class: "results-list",
            for record in records.iter() {
                div {
                    class: if Some(record.objectid) == featured_id { "result-item active" } else { "result-item" },
                    onclick: {
                        let record = record.clone();
                        move |_| {
                            *FEATURED_RESULT.write() = Some(record.clone());
                        }
                    },
                    // Thumbnail
                    if record.primaryimageurl.is_some() {
                        img {
                            class: "result-thumb",
                            src: record.primaryimageurl.clone().unwrap_or_default(),
                        }
                    }
                    // Title + dated
                    div {
                        class: "result-meta",
                        span {
                            class: "result-title",
                            {record.title.clone().unwrap_or_else(|| "Untitled".to_string())}
                        }
                        if record.dated.is_some() {
                            span {
                                class: "result-dated",
                                {record.dated.clone().unwrap_or_default()}
                            }
                        }
                    }
                }
            }
        }
    }
}
