//! Cloudity Admin - Main Entry Point
//!
//! Server builds serve the Dioxus app through its axum router;
//! browser and desktop builds launch the app directly.

use cloudity_admin::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Cloudity Admin...");

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App)
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http());

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Cloudity Admin initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
