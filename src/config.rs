//! Exposure Configuration
//!
//! Declarative per-plugin exposure lists and logging settings, loaded from a
//! TOML file with environment variable overrides. The facade core reads no
//! files; this module is the only place configuration enters the crate.

use crate::error::SurfaceError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApertureConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Per-plugin exposure declarations, keyed by registry label
    #[serde(default)]
    pub plugins: HashMap<String, PluginExposure>,
}

/// Exposure declaration for one plugin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginExposure {
    /// Member names the plugin's surface should delegate
    #[serde(default)]
    pub expose: Vec<String>,
}

impl ApertureConfig {
    /// Load configuration from a TOML file, with `APERTURE`-prefixed
    /// environment variables overriding file values.
    pub fn load_from_file(path: &Path) -> Result<Self, SurfaceError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("APERTURE").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Declared exposure list for a plugin label; empty when the label has
    /// no declaration (the always-exposed plugin names still apply).
    pub fn expose_for(&self, label: &str) -> Vec<String> {
        self.plugins
            .get(label)
            .map(|p| p.expose.clone())
            .unwrap_or_default()
    }
}
