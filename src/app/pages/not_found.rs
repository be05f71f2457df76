use dioxus::prelude::*;

use crate::app::components::ViewPanel;
use crate::domain::services::route;

/// Catch-all page; goes through the dispatch table so the miss is logged
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! { ViewPanel { view: route(&path) } }
}
