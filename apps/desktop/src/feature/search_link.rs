//! Clickable fact value that dispatches a new search.

use dioxus::prelude::*;

use artscope_core::{dispatch_query, SearchQuery};
use crate::state::*;

/// A fact value rendered as a link. Clicking it queries the collection
/// for objects sharing the fact and replaces the current results. The
/// label shows the raw value; the query goes out normalized.
#[component]
pub fn SearchLink(term: String, value: String) -> Element {
    rsx! {
        span {
            class: "content",
            a {
                href: "#",
                onclick: {
                    let term = term.clone();
                    let value = value.clone();
                    move |event: Event<MouseData>| {
                        event.prevent_default();
                        let query = SearchQuery::new(&term, &value);
                        spawn(async move {
                            let client = match CLIENT.read().as_ref() {
                                Some(c) => c.clone(),
                                None => return,
                            };
                            dispatch_query(
                                client.as_ref(),
                                &query,
                                |loading| *IS_LOADING.write() = loading,
                                |results| *SEARCH_RESULTS.write() = Some(results),
                            )
                            .await;
                        });
                    }
                },
                "{value}"
            }
        }
    }
}
