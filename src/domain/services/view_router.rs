//! Path to view dispatch.
//!
//! `ROUTE_TABLE` is the single source for which paths have a view. Paths not
//! in the table produce `View::NotFound` rather than an empty content region.

use crate::domain::models::{sample_tenants, Metric, TenantRow, DASHBOARD_METRICS, TENANT_COLUMNS};
use crate::shared::logging::log_unmapped_path;

/// Content shown in the shell's main region
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard { metrics: &'static [Metric] },
    Tenants { columns: [&'static str; 4], rows: Vec<TenantRow> },
    Users,
    Settings,
    NotFound { path: String },
}

impl View {
    pub fn dashboard() -> Self {
        View::Dashboard { metrics: DASHBOARD_METRICS }
    }

    pub fn tenants() -> Self {
        View::Tenants {
            columns: TENANT_COLUMNS,
            rows: sample_tenants(),
        }
    }

    pub fn users() -> Self {
        View::Users
    }

    pub fn settings() -> Self {
        View::Settings
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        View::NotFound { path: path.into() }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard { .. } => "Dashboard",
            View::Tenants { .. } => "Tenants",
            View::Users => "Users",
            View::Settings => "Settings",
            View::NotFound { .. } => "Page not found",
        }
    }

    /// Body text for views that have no content yet
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            View::Users => Some("Users Page"),
            View::Settings => Some("Settings Page"),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, View::NotFound { .. })
    }
}

/// Exact path to view constructor
pub const ROUTE_TABLE: &[(&str, fn() -> View)] = &[
    ("/", View::dashboard),
    ("/tenants", View::tenants),
    ("/users", View::users),
    ("/settings", View::settings),
];

pub fn route(path: &str) -> View {
    match ROUTE_TABLE.iter().find(|(mapped, _)| *mapped == path) {
        Some((_, build)) => build(),
        None => {
            log_unmapped_path(path);
            View::not_found(path)
        }
    }
}
