//! Feature panel — detail view for the selected object.

mod search_link;

use dioxus::prelude::*;

use artscope_core::facts::collect_facts;
use crate::state::*;
use search_link::SearchLink;

/// Detail panel for the featured object: header, facts, photos.
/// Renders an empty shell when nothing is featured.
#[component]
pub fn FeaturePanel() -> Element {
    let featured = FEATURED_RESULT.read();

    let record = match featured.as_ref() {
        Some(record) => record,
        None => {
            return rsx! {
                main { id: "feature" }
            };
        }
    };

    let facts = collect_facts(record);
    let images = record.images.clone().unwrap_or_default();

    rsx! {
        main {
            id: "feature",
            div {
                class: "object-feature",

                header {
                    h3 { {record.title.clone().unwrap_or_default()} }
                    h4 { {record.dated.clone().unwrap_or_default()} }
                }

                section {
                    class: "facts",
                    for fact in facts {
                        span { class: "title", {fact.label} }
                        if fact.search_term.is_some() {
                            SearchLink {
                                term: fact.search_term.unwrap_or_default().to_string(),
                                value: fact.value,
                            }
                        } else {
                            span { class: "content", {fact.value} }
                        }
                    }
                }

                section {
                    class: "photos",
                    for image in images {
                        img {
                            src: "{image.baseimageurl}",
                            alt: "{image.alttext}",
                        }
                    }
                }
            }
        }
    }
}
