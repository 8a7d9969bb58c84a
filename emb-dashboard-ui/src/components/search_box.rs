//! Free-text search over reservoir name and municipality.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let text = (state.search_text)();

    rsx! {
        div {
            class: "search-box",
            style: "margin: 8px 0; flex: 1; min-width: 220px;",
            i { class: "fas fa-search", style: "margin-right: 6px; color: #7f8c8d;" }
            input {
                id: "searchInput",
                r#type: "text",
                placeholder: "Buscar embalse o municipio...",
                value: "{text}",
                style: "width: 80%; padding: 6px 8px;",
                oninput: move |evt: Event<FormData>| state.search_text.set(evt.value()),
            }
        }
    }
}
