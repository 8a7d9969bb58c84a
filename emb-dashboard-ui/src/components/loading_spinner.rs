//! Inline loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Cargando datos de los embalses...".to_string())]
    pub message: String,
}

/// Spinner glyph plus a message, centred in its parent.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "loading-spinner",
            style: "display: flex; justify-content: center; align-items: center; gap: 10px; padding: 40px; color: #666;",
            i { class: "fas fa-spinner fa-spin" }
            span { "{props.message}" }
        }
    }
}
