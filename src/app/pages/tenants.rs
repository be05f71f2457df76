use dioxus::prelude::*;

use crate::app::components::ViewPanel;
use crate::domain::services::View;

#[component]
pub fn Tenants() -> Element {
    rsx! { ViewPanel { view: View::tenants() } }
}
