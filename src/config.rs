//! Dashboard configuration
//!
//! Everything has a default so the shell runs without any configuration.
//! `AdminConfig::load` layers the optional `assets/admin.json` overrides
//! embedded at build time on top of the defaults.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

/// Title shown at the top of the navigation rail
pub const DEFAULT_TITLE: &str = "Cloudity Admin";

/// Query results stay fresh for 5 minutes
pub const DEFAULT_STALE_TIME_SECS: u64 = 5 * 60;

/// Longest accepted stale time, one day
pub const MAX_STALE_TIME_SECS: u64 = 24 * 60 * 60;

/// Contents of `assets/admin.json` at build time, `{}` when the file is absent
const EMBEDDED_OVERRIDES: &str = include_str!(concat!(env!("OUT_DIR"), "/admin.json"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub title: String,
    pub query: QueryConfig,
    pub toast: ToastConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            query: QueryConfig::default(),
            toast: ToastConfig::default(),
        }
    }
}

impl AdminConfig {
    /// Defaults with the embedded overrides applied
    pub fn load() -> Self {
        Self::from_json_or_default(EMBEDDED_OVERRIDES)
    }

    /// Invalid overrides are logged and ignored
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Ignoring invalid admin config overrides");
            Self::default()
        })
    }

    /// Parse a JSON document, filling missing fields with defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AdminConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.stale_time_secs == 0 {
            return Err(AppError::Config("query.stale_time_secs must be greater than 0".into()));
        }
        if self.query.stale_time_secs > MAX_STALE_TIME_SECS {
            return Err(AppError::Config(format!(
                "query.stale_time_secs must be at most {MAX_STALE_TIME_SECS}"
            )));
        }
        if self.toast.max_visible == 0 {
            return Err(AppError::Config("toast.max_visible must be greater than 0".into()));
        }
        Ok(())
    }
}

/// Behaviour of the query cache provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub stale_time_secs: u64,
    pub refetch_on_window_focus: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: DEFAULT_STALE_TIME_SECS,
            refetch_on_window_focus: false,
        }
    }
}

impl QueryConfig {
    /// Saturates at `MAX_STALE_TIME_SECS` for configs built without `validate`
    pub fn stale_time(&self) -> chrono::Duration {
        let secs = self.stale_time_secs.min(MAX_STALE_TIME_SECS);
        i64::try_from(secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

/// Screen corner the notification surface is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub position: ToastPosition,
    pub duration_ms: u32,
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            duration_ms: 4000,
            max_visible: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shell_settings() {
        let config = AdminConfig::default();
        assert_eq!(config.title, "Cloudity Admin");
        assert_eq!(config.query.stale_time_secs, 300);
        assert!(!config.query.refetch_on_window_focus);
        assert_eq!(config.query.stale_time(), chrono::Duration::minutes(5));
        assert_eq!(config.toast.position, ToastPosition::TopRight);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = AdminConfig::from_json(r#"{"toast": {"position": "bottom-left"}}"#).unwrap();
        assert_eq!(config.toast.position, ToastPosition::BottomLeft);
        assert_eq!(config.toast.max_visible, 5);
        assert_eq!(config.query, QueryConfig::default());
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_invalid_overrides_fall_back_to_defaults() {
        let config = AdminConfig::from_json_or_default(r#"{"query": {"stale_time_secs": 18446744073709551615}}"#);
        assert_eq!(config, AdminConfig::default());

        let config = AdminConfig::from_json_or_default(r#"{"title": "Staging Admin"}"#);
        assert_eq!(config.title, "Staging Admin");
    }

    #[test]
    fn test_load_yields_valid_config() {
        assert!(AdminConfig::load().validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_zero_stale_time() {
        let err = AdminConfig::from_json(r#"{"query": {"stale_time_secs": 0}}"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_stale_time_past_one_day() {
        for raw in [
            r#"{"query": {"stale_time_secs": 18446744073709551615}}"#,
            r#"{"query": {"stale_time_secs": 10000000000000000}}"#,
            r#"{"query": {"stale_time_secs": 86401}}"#,
        ] {
            let err = AdminConfig::from_json(raw).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "accepted {raw}");
        }

        let config = AdminConfig::from_json(r#"{"query": {"stale_time_secs": 86400}}"#).unwrap();
        assert_eq!(config.query.stale_time(), chrono::Duration::days(1));
    }

    #[test]
    fn test_stale_time_saturates_for_unvalidated_values() {
        for secs in [u64::MAX, 10_000_000_000_000_000] {
            let query = QueryConfig {
                stale_time_secs: secs,
                refetch_on_window_focus: false,
            };
            assert_eq!(query.stale_time(), chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = AdminConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_toast_position_as_str() {
        assert_eq!(ToastPosition::TopRight.as_str(), "top-right");
        assert_eq!(ToastPosition::BottomLeft.as_str(), "bottom-left");
    }
}
