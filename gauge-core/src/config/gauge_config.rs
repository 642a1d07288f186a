//! Top-level Gauge configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalyticsConfig, TelemetryConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GAUGE_*`)
/// 2. Project config (`gauge.toml` in project root)
/// 3. User config (`~/.gauge/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GaugeConfig {
    pub analytics: AnalyticsConfig,
    pub telemetry: TelemetryConfig,
}

impl GaugeConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest file layer): user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings,
                        // not fatal. Continue with defaults.
                    }
                }
            }
        }

        // Layer 2: project config
        let project_config_path = root.join("gauge.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        tracing::debug!(
            top_categories = config.analytics.effective_top_categories(),
            trend_months = ?config.analytics.trend_months,
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GaugeConfig) -> Result<(), ConfigError> {
        if let Some(n) = config.analytics.top_categories {
            if n == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analytics.top_categories".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(months) = config.analytics.trend_months {
            if months == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analytics.trend_months".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(capacity) = config.analytics.cache_capacity {
            if capacity == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analytics.cache_capacity".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GaugeConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: GaugeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut GaugeConfig, other: &GaugeConfig) {
        // Analytics
        if other.analytics.top_categories.is_some() {
            base.analytics.top_categories = other.analytics.top_categories;
        }
        if other.analytics.trend_months.is_some() {
            base.analytics.trend_months = other.analytics.trend_months;
        }
        if other.analytics.cache_capacity.is_some() {
            base.analytics.cache_capacity = other.analytics.cache_capacity;
        }

        // Telemetry
        if other.telemetry.enabled.is_some() {
            base.telemetry.enabled = other.telemetry.enabled;
        }
        if other.telemetry.default_filter.is_some() {
            base.telemetry.default_filter = other.telemetry.default_filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GAUGE_ANALYTICS_TOP_CATEGORIES`, `GAUGE_TELEMETRY_ENABLED`, etc.
    fn apply_env_overrides(config: &mut GaugeConfig) {
        if let Ok(val) = std::env::var("GAUGE_ANALYTICS_TOP_CATEGORIES") {
            if let Ok(v) = val.parse::<usize>() {
                config.analytics.top_categories = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GAUGE_ANALYTICS_TREND_MONTHS") {
            if let Ok(v) = val.parse::<u32>() {
                config.analytics.trend_months = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GAUGE_ANALYTICS_CACHE_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                config.analytics.cache_capacity = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GAUGE_TELEMETRY_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.telemetry.enabled = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user config path: `~/.gauge/config.toml`.
fn user_config_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".gauge").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
