// Custom Dioxus hooks
pub mod use_query_client;
pub mod use_toasts;

pub use use_query_client::use_query_client_provider;
pub use use_toasts::{use_toast_provider, use_toasts, Toasts};
