//! Logging System
//!
//! Structured logging initialization for hosts embedding the surface layer,
//! built on the `tracing` crate. Provides configurable log levels, output
//! formats, and per-module directives.

use crate::error::SurfaceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `APERTURE_LOG` environment variable
/// 2. Configuration values
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), SurfaceError> {
    let filter = build_env_filter(config)?;
    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .try_init()
            .map_err(|e| SurfaceError::Logging(e.to_string()))?;
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stdout),
            )
            .try_init()
            .map_err(|e| SurfaceError::Logging(e.to_string()))?;
    }

    Ok(())
}

/// Build environment filter from config or the `APERTURE_LOG` variable
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, SurfaceError> {
    if let Ok(filter) = EnvFilter::try_from_env("APERTURE_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");

    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(directive.parse().map_err(|e| {
                SurfaceError::Config(format!("Invalid log directive: {}", e))
            })?);
        }
    }

    Ok(filter)
}
