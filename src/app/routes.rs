use dioxus::prelude::*;

use crate::app::components::ToastZone;
use crate::app::layouts::AdminLayout;
use crate::app::pages::{Dashboard, NotFound, Settings, Tenants, Users};
use crate::config::AdminConfig;
use crate::shared::hooks::{use_query_client_provider, use_toast_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AdminLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/tenants")]
    Tenants {},
    #[route("/users")]
    Users {},
    #[route("/settings")]
    Settings {},

    // Anything else renders inside the shell with no entry highlighted
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // build.rs writes the bundle before the crate compiles
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context_provider(AdminConfig::load);
    use_query_client_provider(config.query);
    use_toast_provider(config.toast);

    use_effect(|| {
        tracing::info!("Cloudity admin shell initialized");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Router::<Route> {}
        ToastZone { position: config.toast.position }
    }
}
