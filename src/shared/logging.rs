//! Structured logging helpers for the admin dashboard
//!
//! Every helper tags its event with an `operation` field so the shell's
//! navigation, cache and notification activity can be filtered separately.

/// Operation tags attached to dashboard log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    RouteResolution,
    QueryCache,
    Notification,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::RouteResolution => "route_resolution",
            LogOperation::QueryCache => "query_cache",
            LogOperation::Notification => "notification",
        }
    }
}

/// Log the sidebar entry highlighted for the current location
pub fn log_active_entry(path: &str, entry: Option<&str>) {
    match entry {
        Some(label) => tracing::trace!(
            operation = LogOperation::Navigation.as_str(),
            path = path,
            entry = label,
            "Active navigation entry resolved"
        ),
        None => tracing::trace!(
            operation = LogOperation::Navigation.as_str(),
            path = path,
            "No navigation entry matches current location"
        ),
    }
}

/// Log a path that has no view in the dispatch table
pub fn log_unmapped_path(path: &str) {
    tracing::debug!(
        operation = LogOperation::RouteResolution.as_str(),
        path = path,
        "Unmapped path, rendering not found view"
    );
}

/// Log a cache lookup
pub fn log_cache_lookup(key: &str, hit: bool) {
    tracing::trace!(
        operation = LogOperation::QueryCache.as_str(),
        key = key,
        hit = hit,
        "Query cache lookup"
    );
}

/// Log eviction of a stale cache entry
pub fn log_cache_evicted(key: &str, age_secs: i64) {
    tracing::debug!(
        operation = LogOperation::QueryCache.as_str(),
        key = key,
        age_secs = age_secs,
        "Evicted stale query cache entry"
    );
}

/// Log a toast being queued
pub fn log_toast_pushed(kind: &str, message: &str, evicted: usize) {
    tracing::debug!(
        operation = LogOperation::Notification.as_str(),
        kind = kind,
        message = message,
        evicted = evicted,
        "Toast queued"
    );
}
