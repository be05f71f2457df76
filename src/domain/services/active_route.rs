//! Which sidebar entry is highlighted for a location.
//!
//! The result is always derived from the current path on each render and is
//! never stored.

use crate::domain::models::NavigationEntry;

/// First entry whose path equals `current_path` exactly.
pub fn resolve<'a>(current_path: &str, entries: &'a [NavigationEntry]) -> Option<&'a NavigationEntry> {
    entries.iter().find(|entry| is_active(entry, current_path))
}

pub fn is_active(entry: &NavigationEntry, current_path: &str) -> bool {
    entry.path == current_path
}
