//! Configuration handling for the TUI

use crate::api::DEFAULT_ENDPOINT;
use crate::state::DEFAULT_TOAST_DURATION;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "FEEDBACK_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Feedback endpoint URL
    pub endpoint: Option<String>,
    /// How long toasts stay visible, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Request timeout in seconds; unset waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "feedback", "feedback-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to post to: environment, then file, then the built-in default
    pub fn endpoint(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|e| !e.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.toast_duration_ms.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            endpoint: Some("http://localhost:8080/api/v1/user/feedback".to_string()),
            toast_duration_ms: Some(5000),
            request_timeout_secs: Some(30),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("http://localhost:8080/api/v1/user/feedback".to_string())
        );
        assert_eq!(parsed.toast_duration_ms, Some(5000));
        assert_eq!(parsed.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://x", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint, Some("http://x".to_string()));
    }

    #[test]
    fn test_endpoint_defaults_to_builtin() {
        let config = TuiConfig::default();
        assert_eq!(config.endpoint(None), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_env_overrides_file() {
        let config = TuiConfig {
            endpoint: Some("http://file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint(Some("http://env".to_string())), "http://env");
        assert_eq!(config.endpoint(None), "http://file");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = TuiConfig::default();
        assert_eq!(config.endpoint(Some("  ".to_string())), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_durations() {
        let config = TuiConfig {
            toast_duration_ms: Some(1500),
            request_timeout_secs: Some(10),
            ..Default::default()
        };
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(TuiConfig::default().toast_duration(), DEFAULT_TOAST_DURATION);
        assert_eq!(TuiConfig::default().request_timeout(), None);
    }

    #[test]
    fn test_load_returns_ok() {
        // Load returns the default config when no file exists
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
