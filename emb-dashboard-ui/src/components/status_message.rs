//! Floating loading message and success/error notice.

use crate::state::AppState;
use dioxus::prelude::*;
use emb_data::status::NoticeKind;

const BOX_STYLE: &str =
    "position: fixed; top: 20px; right: 20px; padding: 12px 18px; border-radius: 8px; color: #fff; z-index: 1100;";

#[component]
pub fn StatusMessage() -> Element {
    let mut state = use_context::<AppState>();
    let (loading, notice) = {
        let status = state.status.read();
        (status.loading().map(str::to_string), status.current().cloned())
    };

    let notice_view = notice.map(|n| {
        let (background, icon) = match n.kind {
            NoticeKind::Success => ("#27ae60", "fas fa-check-circle"),
            NoticeKind::Error => ("#e74c3c", "fas fa-exclamation-circle"),
        };
        (n.id, n.kind.as_str(), background, icon, n.message)
    });

    rsx! {
        if let Some(message) = loading {
            div {
                class: "loading-message",
                style: "{BOX_STYLE} background: #3498db;",
                div {
                    class: "message-content",
                    i { class: "fas fa-spinner fa-spin", style: "margin-right: 8px;" }
                    span { "{message}" }
                }
            }
        }
        if let Some((id, kind, background, icon, message)) = notice_view {
            div {
                class: "status-message {kind}",
                style: "{BOX_STYLE} background: {background};",
                div {
                    class: "message-content",
                    i { class: "{icon}", style: "margin-right: 8px;" }
                    span { "{message}" }
                    button {
                        class: "close-message",
                        style: "margin-left: 12px; background: none; border: none; color: #fff; font-size: 18px; cursor: pointer;",
                        onclick: move |_| {
                            state.status.write().dismiss(id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
