use serde::{Deserialize, Serialize};

/// Lifecycle states a tenant can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Suspended,
    Deleted,
}

impl TenantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TenantStatus::Active => "Active",
            TenantStatus::Suspended => "Suspended",
            TenantStatus::Deleted => "Deleted",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TenantStatus::Active => "c-badge c-badge--active",
            TenantStatus::Suspended => "c-badge c-badge--suspended",
            TenantStatus::Deleted => "c-badge c-badge--deleted",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TenantStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRow {
    pub name: String,
    pub domain: String,
    pub status: TenantStatus,
}

impl TenantRow {
    pub fn new(name: impl Into<String>, domain: impl Into<String>, status: TenantStatus) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            status,
        }
    }
}

pub const TENANT_COLUMNS: [&str; 4] = ["Name", "Domain", "Status", "Actions"];

/// Rows shown until the tenant list is backed by the admin service
pub fn sample_tenants() -> Vec<TenantRow> {
    vec![TenantRow::new("Acme Corp", "acme.cloudity.io", TenantStatus::Active)]
}
