//! Surface Targets
//!
//! The forwarding boundary of the facade: the `Target` contract a surface
//! delegates to, the labeled `PluginTarget` refinement, and map-backed
//! implementations hosts use to assemble plugin internals from components.

use crate::capability::Delegate;
use crate::value::Value;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handle to a target behind a surface.
pub type SharedTarget = Arc<RwLock<dyn Target + Send + Sync>>;

/// Shared handle to a labeled plugin target.
pub type SharedPlugin = Arc<RwLock<dyn PluginTarget + Send + Sync>>;

/// An internal, mutable object a surface forwards reads and writes to.
///
/// The surface assumes nothing about the target beyond this contract; in
/// particular it never validates that an exposed name is actually defined
/// here, and it never caches what `get` returns.
pub trait Target {
    /// Current delegate bound at `name`, if the target defines it.
    fn get(&self, name: &str) -> Option<Delegate>;

    /// Plain assignment of `value` at `name`, replacing any prior binding.
    fn set(&mut self, name: &str, value: Value);

    /// The target's own textual representation.
    fn repr(&self) -> String;

    /// The target's documentation text, if any.
    fn doc(&self) -> Option<String> {
        None
    }
}

/// A target that has been assigned a human-readable label by the host's
/// naming collaborator.
pub trait PluginTarget: Target {
    fn registry_label(&self) -> String;
}

/// General-purpose target backed by a member map.
///
/// Hosts compose plugin internals by binding values and components at member
/// names; iteration order of the map is deterministic.
pub struct ObjectTarget {
    repr: String,
    doc: Option<String>,
    members: BTreeMap<String, Delegate>,
}

impl ObjectTarget {
    pub fn new(repr: impl Into<String>) -> Self {
        ObjectTarget {
            repr: repr.into(),
            doc: None,
            members: BTreeMap::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_member(mut self, name: impl Into<String>, delegate: Delegate) -> Self {
        self.members.insert(name.into(), delegate);
        self
    }

    /// Bind a delegate at `name`, replacing any prior binding.
    pub fn insert(&mut self, name: impl Into<String>, delegate: Delegate) {
        self.members.insert(name.into(), delegate);
    }

    /// Names the target currently defines.
    pub fn member_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }
}

impl Target for ObjectTarget {
    fn get(&self, name: &str) -> Option<Delegate> {
        self.members.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: Value) {
        self.members.insert(name.to_string(), Delegate::Value(value));
    }

    fn repr(&self) -> String {
        self.repr.clone()
    }

    fn doc(&self) -> Option<String> {
        self.doc.clone()
    }
}

/// Labeled plugin target wrapping an [`ObjectTarget`].
pub struct PluginObject {
    label: String,
    object: ObjectTarget,
}

impl PluginObject {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let object = ObjectTarget::new(format!("<{} plugin object>", label));
        PluginObject { label, object }
    }

    pub fn with_repr(mut self, repr: impl Into<String>) -> Self {
        self.object.repr = repr.into();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.object = self.object.with_doc(doc);
        self
    }

    pub fn with_member(mut self, name: impl Into<String>, delegate: Delegate) -> Self {
        self.object = self.object.with_member(name, delegate);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, delegate: Delegate) {
        self.object.insert(name, delegate);
    }
}

impl Target for PluginObject {
    fn get(&self, name: &str) -> Option<Delegate> {
        self.object.get(name)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.object.set(name, value);
    }

    fn repr(&self) -> String {
        self.object.repr()
    }

    fn doc(&self) -> Option<String> {
        self.object.doc()
    }
}

impl PluginTarget for PluginObject {
    fn registry_label(&self) -> String {
        self.label.clone()
    }
}
