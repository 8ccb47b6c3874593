//! Surface registry: in-memory aggregate of constructed plugin surfaces.
//!
//! Keyed by registry label. Label assignment itself happens elsewhere in the
//! host; targets arrive here already labeled.

use crate::error::SurfaceError;
use crate::surface::plugin::PluginSurface;
use crate::target::PluginTarget;
use std::collections::HashMap;

/// Registry of plugin surfaces by label.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, PluginSurface>,
}

impl SurfaceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        SurfaceRegistry {
            surfaces: HashMap::new(),
        }
    }

    /// Register a surface under its plugin's label. Last registration wins.
    pub fn register(&mut self, surface: PluginSurface) {
        self.surfaces.insert(surface.label(), surface);
    }

    /// Build a surface for a plugin target and register it.
    pub fn register_target<P, I, S>(&mut self, plugin: P, expose: I)
    where
        P: PluginTarget + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(PluginSurface::new(plugin, expose));
    }

    /// Get a surface by label.
    pub fn get(&self, label: &str) -> Option<&PluginSurface> {
        self.surfaces.get(label)
    }

    /// Get a surface by label, mutably.
    pub fn get_mut(&mut self, label: &str) -> Option<&mut PluginSurface> {
        self.surfaces.get_mut(label)
    }

    /// Get a surface by label or return an error.
    pub fn get_or_error(&self, label: &str) -> Result<&PluginSurface, SurfaceError> {
        self.get(label)
            .ok_or_else(|| SurfaceError::UnknownPlugin(label.to_string()))
    }

    /// Registered labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Remove a surface from the registry.
    pub fn remove(&mut self, label: &str) -> Option<PluginSurface> {
        self.surfaces.remove(label)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
