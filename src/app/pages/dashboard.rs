use dioxus::prelude::*;

use crate::app::components::ViewPanel;
use crate::domain::services::View;

#[component]
pub fn Dashboard() -> Element {
    rsx! { ViewPanel { view: View::dashboard() } }
}
