//! Dropdown selector for choosing a reservoir.

use crate::state::AppState;
use dioxus::prelude::*;

/// Reservoir dropdown, sorted by name.
/// Updates `selected_id`; the empty entry clears the selection.
#[component]
pub fn ReservoirSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.dashboard.read().selector_options();
    let selected = (state.selected_id)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_id.set(evt.value().parse::<u32>().ok());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "embalseSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "Embalse: "
            }
            select {
                id: "embalseSelect",
                onchange: on_change,
                option { value: "", selected: selected.is_none(), "Selecciona un embalse..." }
                for opt in options.iter() {
                    option {
                        value: "{opt.id}",
                        selected: selected == Some(opt.id),
                        "{opt.name}"
                    }
                }
            }
        }
    }
}
