use dioxus::prelude::*;

use crate::app::layouts::Sidebar;
use crate::app::routes::Route;
use crate::config::AdminConfig;
use crate::domain::models::NAVIGATION;
use crate::domain::services::resolve;
use crate::shared::logging::log_active_entry;

/// Navigation rail on the left, routed view on the right
#[component]
pub fn AdminLayout() -> Element {
    let config = use_context::<AdminConfig>();
    let current_route = use_route::<Route>();

    // Derived on every render from the router's location
    let current_path = current_route.to_string();
    let active = resolve(&current_path, NAVIGATION).copied();
    log_active_entry(&current_path, active.map(|entry| entry.label));

    rsx! {
        div { class: "c-admin",
            div { class: "c-admin__body",
                Sidebar { title: config.title.clone(), active: active }

                main { class: "c-admin__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
