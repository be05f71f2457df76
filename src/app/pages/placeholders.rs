use dioxus::prelude::*;

use crate::app::components::ViewPanel;
use crate::domain::services::View;

// Stub pages until user management and settings exist

#[component]
pub fn Users() -> Element {
    rsx! { ViewPanel { view: View::users() } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { ViewPanel { view: View::settings() } }
}
