use dioxus::prelude::*;

use crate::domain::models::{IconRef, NavigationEntry, LOGOUT_LABEL, NAVIGATION};

/// BEM classes for a sidebar link
pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "c-sidebar__link c-sidebar__link--active"
    } else {
        "c-sidebar__link"
    }
}

#[component]
pub fn Sidebar(title: String, #[props(!optional)] active: Option<NavigationEntry>) -> Element {
    rsx! {
        aside { class: "c-sidebar",
            div { class: "c-sidebar__header",
                h1 { class: "c-sidebar__title", "{title}" }
            }
            nav { class: "c-sidebar__nav",
                for entry in NAVIGATION.iter() {
                    SidebarLink {
                        key: "{entry.path}",
                        entry: *entry,
                        active: active.as_ref() == Some(entry),
                    }
                }
                LogoutButton {}
            }
        }
    }
}

#[component]
fn SidebarLink(entry: NavigationEntry, active: bool) -> Element {
    let glyph = entry.icon.glyph();
    let icon_name = entry.icon.as_str();

    rsx! {
        Link {
            to: entry.path,
            class: nav_link_class(active),
            span { class: "c-sidebar__icon c-sidebar__icon--{icon_name}", "{glyph}" }
            "{entry.label}"
        }
    }
}

// No handler until an auth service is wired in
#[component]
fn LogoutButton() -> Element {
    let glyph = IconRef::LogOut.glyph();
    let icon_name = IconRef::LogOut.as_str();

    rsx! {
        button {
            r#type: "button",
            class: "c-sidebar__link c-sidebar__link--logout",
            span { class: "c-sidebar__icon c-sidebar__icon--{icon_name}", "{glyph}" }
            "{LOGOUT_LABEL}"
        }
    }
}
