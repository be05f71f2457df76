pub mod button;
pub mod card;
pub mod tenant_table;
pub mod toast_zone;
pub mod view_panel;

pub use button::{Button, ButtonVariant};
pub use card::MetricCard;
pub use tenant_table::TenantTable;
pub use toast_zone::{ToastItem, ToastZone};
pub use view_panel::ViewPanel;
