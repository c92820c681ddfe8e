//! Metadata strip showing the current result count and page span.

use dioxus::prelude::*;
use crate::state::*;

#[component]
pub fn MetadataStrip() -> Element {
    let results = SEARCH_RESULTS.read();
    let query = QUERY.read();

    if query.trim().is_empty() {
        return rsx! {
            div { class: "metadata-strip hidden" }
        };
    }

    let (total, page, pages) = match results.as_ref() {
        Some(set) => (set.info.totalrecords, set.info.page, set.info.pages),
        None => (0, 0, 0),
    };

    rsx! {
        div {
            class: "metadata-strip",
            if results.is_some() {
                span { class: "metadata-count", "{total} objects" }
                span { class: "metadata-sep", "\u{00B7}" }
                span { class: "metadata-pages", "page {page} of {pages}" }
            }
        }
    }
}
