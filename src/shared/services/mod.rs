// Framework-agnostic state behind the shell's context providers
pub mod query_client;
pub mod toast_queue;

pub use query_client::QueryClient;
pub use toast_queue::{Toast, ToastKind, ToastQueue};
