// Pure navigation logic
// Framework-agnostic, 100% testable

pub mod active_route;
pub mod view_router;

pub use active_route::{is_active, resolve};
pub use view_router::{route, View, ROUTE_TABLE};
