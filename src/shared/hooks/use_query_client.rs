use dioxus::prelude::*;

use crate::config::QueryConfig;
use crate::shared::services::QueryClient;

/// Create the process-wide query cache and expose it to descendants
pub fn use_query_client_provider(config: QueryConfig) -> QueryClient {
    use_context_provider(move || {
        tracing::debug!(
            stale_time_secs = config.stale_time_secs,
            refetch_on_window_focus = config.refetch_on_window_focus,
            "Query client created"
        );
        QueryClient::new(config)
    })
}
