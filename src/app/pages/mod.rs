pub mod dashboard;
pub mod not_found;
pub mod placeholders;
pub mod tenants;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use placeholders::{Settings, Users};
pub use tenants::Tenants;
