use serde::Serialize;

/// Colour used for a metric's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
        }
    }
}

/// A headline number on the dashboard. Values are display strings, not counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

pub const DASHBOARD_METRICS: &[Metric] = &[
    Metric { label: "Active Tenants", value: "12", accent: Accent::Blue },
    Metric { label: "Total Users", value: "248", accent: Accent::Green },
    Metric { label: "API Calls Today", value: "3,421", accent: Accent::Purple },
];
