//! Search Bar Component
//!
//! Single text input across the top of the trail page. Every keystroke is
//! passed straight through; there is no debouncing.

use dioxus::prelude::*;

#[component]
pub fn SearchBar(
    /// Current query
    value: String,
    /// Called with the new query on every input event
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "search-bar",
            div { class: "search-bar__inner",
                input {
                    r#type: "text",
                    class: "search-bar__input",
                    placeholder: "Search roles, companies, lands...",
                    "aria-label": "Search roles",
                    value: "{value}",
                    oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
                }
            }
        }
    }
}
