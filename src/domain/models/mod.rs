pub mod dashboard;
pub mod navigation;
pub mod tenant;

pub use dashboard::{Accent, Metric, DASHBOARD_METRICS};
pub use navigation::{IconRef, NavigationEntry, LOGOUT_LABEL, NAVIGATION};
pub use tenant::{sample_tenants, TenantRow, TenantStatus, TENANT_COLUMNS};
