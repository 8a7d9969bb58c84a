//! Year and month range filters.
//!
//! Each range has a "from" and a "to" select. Picking only one bound selects
//! that single year or month.

use crate::state::AppState;
use dioxus::prelude::*;
use emb_utils::dates::MONTH_NAMES;

fn parse_choice<T: std::str::FromStr>(value: &str) -> Option<T> {
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}

fn selected_value<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn DateFilters() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.dashboard.read().available_years();
    let year_from = selected_value((state.year_from)());
    let year_to = selected_value((state.year_to)());
    let month_from = selected_value((state.month_from)());
    let month_to = selected_value((state.month_to)());

    rsx! {
        div {
            class: "date-filters",
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Año desde: "
                select {
                    id: "yearFrom",
                    value: "{year_from}",
                    onchange: move |evt: Event<FormData>| state.year_from.set(parse_choice(&evt.value())),
                    option { value: "", "Todos" }
                    for year in years.iter() {
                        option { value: "{year}", selected: year.to_string() == year_from, "{year}" }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "hasta: "
                select {
                    id: "yearTo",
                    value: "{year_to}",
                    onchange: move |evt: Event<FormData>| state.year_to.set(parse_choice(&evt.value())),
                    option { value: "", "Todos" }
                    for year in years.iter() {
                        option { value: "{year}", selected: year.to_string() == year_to, "{year}" }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Mes desde: "
                select {
                    id: "monthFrom",
                    value: "{month_from}",
                    onchange: move |evt: Event<FormData>| state.month_from.set(parse_choice(&evt.value())),
                    option { value: "", "Todos" }
                    for (month, name) in (1..=12u32).zip(MONTH_NAMES) {
                        option {
                            value: "{month}",
                            selected: month.to_string() == month_from,
                            "{name}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "hasta: "
                select {
                    id: "monthTo",
                    value: "{month_to}",
                    onchange: move |evt: Event<FormData>| state.month_to.set(parse_choice(&evt.value())),
                    option { value: "", "Todos" }
                    for (month, name) in (1..=12u32).zip(MONTH_NAMES) {
                        option {
                            value: "{month}",
                            selected: month.to_string() == month_to,
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
