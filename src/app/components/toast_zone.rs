use dioxus::prelude::*;
use uuid::Uuid;

use crate::config::ToastPosition;
use crate::shared::hooks::use_toasts;
use crate::shared::services::Toast;

/// Fixed-corner stack of transient notifications
#[component]
pub fn ToastZone(position: ToastPosition) -> Element {
    let mut toasts = use_toasts();
    let position_class = position.as_str();
    let visible = toasts.visible();

    rsx! {
        div {
            class: "c-toast-zone c-toast-zone--{position_class}",
            role: "status",
            for toast in visible {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id: Uuid| toasts.dismiss(id),
                }
            }
        }
    }
}

#[component]
pub fn ToastItem(toast: Toast, on_dismiss: EventHandler<Uuid>) -> Element {
    let kind = toast.kind.as_str();
    let icon = toast.kind.icon();
    let id = toast.id;

    rsx! {
        div { class: "c-toast c-toast--{kind}",
            span { class: "c-toast__icon", "{icon}" }
            span { class: "c-toast__message", "{toast.message}" }
            button {
                r#type: "button",
                class: "c-toast__close",
                aria_label: "Dismiss notification",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}
