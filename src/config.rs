use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::scale::ReferenceBaseline;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub baseline: BaselineSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Reference baseline measurements. These are the process-wide
/// constants every scale factor divides by; overriding them is an
/// explicit versioning decision, never a runtime mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct BaselineSettings {
    #[serde(default = "default_baseline_height")]
    pub height_cm: f64,
    #[serde(default = "default_baseline_chest")]
    pub chest_cm: f64,
    #[serde(default = "default_baseline_waist")]
    pub waist_cm: f64,
    #[serde(default = "default_baseline_hips")]
    pub hips_cm: f64,
}

impl Default for BaselineSettings {
    fn default() -> Self {
        Self {
            height_cm: default_baseline_height(),
            chest_cm: default_baseline_chest(),
            waist_cm: default_baseline_waist(),
            hips_cm: default_baseline_hips(),
        }
    }
}

fn default_baseline_height() -> f64 { 170.0 }
fn default_baseline_chest() -> f64 { 90.0 }
fn default_baseline_waist() -> f64 { 75.0 }
fn default_baseline_hips() -> f64 { 95.0 }

impl From<BaselineSettings> for ReferenceBaseline {
    fn from(settings: BaselineSettings) -> Self {
        Self {
            height_cm: settings.height_cm,
            chest_cm: settings.chest_cm,
            waist_cm: settings.waist_cm,
            hips_cm: settings.hips_cm,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with FITMATE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FITMATE_)
            // e.g., FITMATE_BASELINE__HEIGHT_CM -> baseline.height_cm
            .add_source(
                Environment::with_prefix("FITMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
