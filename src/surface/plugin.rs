//! Plugin Surfaces
//!
//! Specialization of [`ExposureSurface`] for labeled plugin targets: two
//! member names are always delegatable, and the textual representation is a
//! registry-style label instead of the target's own representation.

use crate::error::SurfaceError;
use crate::surface::{ExposureSurface, Resolved};
use crate::target::{PluginTarget, SharedPlugin, SharedTarget};
use crate::value::Value;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Member names every plugin surface delegates, regardless of caller input.
pub const ALWAYS_EXPOSED: [&str; 2] = ["open_in_tray", "show"];

const PLUGIN_SURFACE_DOC: &str =
    "API surface around an internal plugin. Call members() for the list of exposed names; \
     open_in_tray and show are always available.";

/// Curated surface over a labeled plugin target.
#[derive(Clone)]
pub struct PluginSurface {
    surface: ExposureSurface,
    plugin: SharedPlugin,
}

impl PluginSurface {
    /// Wrap an owned plugin target, exposing the given member names plus the
    /// two always-exposed ones.
    pub fn new<P, I, S>(plugin: P, expose: I) -> Self
    where
        P: PluginTarget + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_handle(Arc::new(RwLock::new(plugin)), expose)
    }

    /// Wrap an already-shared plugin handle.
    pub fn from_handle<P, I, S>(plugin: Arc<RwLock<P>>, expose: I) -> Self
    where
        P: PluginTarget + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let as_target: SharedTarget = plugin.clone();
        let as_plugin: SharedPlugin = plugin;
        let names = expose
            .into_iter()
            .map(Into::into)
            .chain(ALWAYS_EXPOSED.iter().map(|name| (*name).to_string()));
        PluginSurface {
            surface: ExposureSurface::build(as_target, names, PLUGIN_SURFACE_DOC),
            plugin: as_plugin,
        }
    }

    /// The plugin's registry label, read live from the target.
    pub fn label(&self) -> String {
        self.plugin.read().registry_label()
    }

    /// The underlying exposure surface.
    pub fn surface(&self) -> &ExposureSurface {
        &self.surface
    }

    pub fn members(&self) -> Vec<&str> {
        self.surface.members()
    }

    pub fn doc(&self) -> &str {
        self.surface.doc()
    }

    pub fn get(&self, name: &str) -> Result<Resolved, SurfaceError> {
        self.surface.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SurfaceError> {
        self.surface.set(name, value)
    }
}

impl fmt::Display for PluginSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} API>", self.plugin.read().registry_label())
    }
}

impl fmt::Debug for PluginSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSurface")
            .field("label", &self.label())
            .field("expose", &self.members())
            .finish()
    }
}
