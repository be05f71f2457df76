use serde::{Deserialize, Serialize};

/// Icon drawn next to a sidebar control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconRef {
    Home,
    Building,
    Users,
    Settings,
    LogOut,
}

impl IconRef {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconRef::Home => "🏠",
            IconRef::Building => "🏢",
            IconRef::Users => "👥",
            IconRef::Settings => "⚙️",
            IconRef::LogOut => "🚪",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconRef::Home => "home",
            IconRef::Building => "building",
            IconRef::Users => "users",
            IconRef::Settings => "settings",
            IconRef::LogOut => "log-out",
        }
    }
}

/// One link in the navigation rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconRef,
}

/// Sidebar entries in display order
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry { label: "Dashboard", path: "/", icon: IconRef::Home },
    NavigationEntry { label: "Tenants", path: "/tenants", icon: IconRef::Building },
    NavigationEntry { label: "Users", path: "/users", icon: IconRef::Users },
    NavigationEntry { label: "Settings", path: "/settings", icon: IconRef::Settings },
];

/// Label of the logout control rendered after the entries
pub const LOGOUT_LABEL: &str = "Logout";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_order() {
        let labels: Vec<_> = NAVIGATION.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Dashboard", "Tenants", "Users", "Settings"]);
    }

    #[test]
    fn test_navigation_paths_are_unique() {
        let paths: HashSet<_> = NAVIGATION.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), NAVIGATION.len());
    }

    #[test]
    fn test_logout_is_not_a_navigation_entry() {
        assert!(NAVIGATION.iter().all(|e| e.icon != IconRef::LogOut));
        assert!(NAVIGATION.iter().all(|e| e.label != LOGOUT_LABEL));
    }
}
