//! Exposure Surfaces
//!
//! The delegation facade at the core of the crate. A surface wraps one
//! target and a fixed set of forwardable member names, resolves reserved
//! internal names locally, and forwards everything else through a per-name
//! dispatch table built at construction.

mod forward;
pub mod plugin;

use crate::capability::{SharedComponent, SharedSelect, SharedSync};
use crate::error::SurfaceError;
use crate::target::{SharedTarget, Target};
use crate::value::Value;
use forward::Forwarder;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Names that always resolve to the surface's own internals, regardless of
/// exposure-set membership.
pub const RESERVED_MEMBERS: [&str; 3] = ["target", "expose", "doc"];

pub(crate) const SURFACE_DOC: &str =
    "API surface around an internal object. Call members() for the list of exposed names.";

/// Successful resolution of a member read.
#[derive(Clone)]
pub enum Resolved {
    /// Plain forwarded or local value.
    Value(Value),
    /// Nested curated surface published by the delegate at that name.
    Surface(ExposureSurface),
    /// Selection component without a nested surface.
    Select(SharedSelect),
    /// Synchronized-state component without a nested surface.
    Sync(SharedSync),
    /// Opaque component without a nested surface.
    Object(SharedComponent),
    /// The wrapped target itself, from the reserved `target` name.
    Target(SharedTarget),
}

impl Resolved {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Resolved::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_surface(self) -> Option<ExposureSurface> {
        match self {
            Resolved::Surface(s) => Some(s),
            _ => None,
        }
    }

    /// Resolution kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolved::Value(_) => "value",
            Resolved::Surface(_) => "surface",
            Resolved::Select(_) => "select",
            Resolved::Sync(_) => "sync",
            Resolved::Object(_) => "object",
            Resolved::Target(_) => "target",
        }
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Resolved::Surface(s) => f.debug_tuple("Surface").field(s).finish(),
            other => f.write_str(match other.kind() {
                "select" => "Select(..)",
                "sync" => "Sync(..)",
                "object" => "Object(..)",
                _ => "Target(..)",
            }),
        }
    }
}

/// Read/write facade around one target and a fixed exposure set.
///
/// Holds no mutable state beyond its reserved internals and the local
/// attribute store; every forwarded value originates from the target at
/// access time.
#[derive(Clone)]
pub struct ExposureSurface {
    target: SharedTarget,
    table: BTreeMap<String, Forwarder>,
    doc: String,
    locals: HashMap<String, Value>,
}

impl ExposureSurface {
    /// Wrap an owned target, exposing exactly the given member names.
    pub fn new<T, I, S>(target: T, expose: I) -> Self
    where
        T: Target + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let shared: SharedTarget = Arc::new(RwLock::new(target));
        Self::from_shared(shared, expose)
    }

    /// Wrap an already-shared target handle.
    ///
    /// This is the constructor components use to publish a nested surface
    /// over internals they share with the rest of the host.
    pub fn from_shared<I, S>(target: SharedTarget, expose: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(target, expose.into_iter().map(Into::into), SURFACE_DOC)
    }

    pub(crate) fn build(
        target: SharedTarget,
        expose: impl Iterator<Item = String>,
        self_doc: &str,
    ) -> Self {
        let table: BTreeMap<String, Forwarder> = expose
            .map(|name| {
                let forwarder = Forwarder::new(name.clone());
                (name, forwarder)
            })
            .collect();

        let target_doc = target.read().doc();
        let doc = match target_doc {
            Some(d) if !d.is_empty() => format!("{}\n\n\n{}", self_doc, d),
            _ => self_doc.to_string(),
        };

        ExposureSurface {
            target,
            table,
            doc,
            locals: HashMap::new(),
        }
    }

    /// The exposure set, in canonical sorted order, independent of what the
    /// target actually defines.
    pub fn members(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }

    /// Documentation text: the surface's own doc, concatenated with the
    /// target's doc when the target provides one.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// The wrapped target handle.
    pub fn target(&self) -> &SharedTarget {
        &self.target
    }

    /// Resolve a member read.
    ///
    /// Reserved names resolve to the surface's own internals; exposed names
    /// forward to the target with nested-surface unwrapping; anything else
    /// is looked up in the local attribute store.
    pub fn get(&self, name: &str) -> Result<Resolved, SurfaceError> {
        if RESERVED_MEMBERS.contains(&name) {
            trace!(member = %name, "resolving reserved member locally");
            return Ok(self.reserved(name));
        }
        if let Some(forwarder) = self.table.get(name) {
            return forwarder.read(&self.target);
        }
        match self.locals.get(name) {
            Some(value) => Ok(Resolved::Value(value.clone())),
            None => Err(SurfaceError::NotFound {
                member: name.to_string(),
            }),
        }
    }

    /// Resolve a member write.
    ///
    /// Reserved names are rejected without touching the target; exposed
    /// names dispatch on the capability of the current delegate; anything
    /// else is assigned locally on the surface.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SurfaceError> {
        let value = value.into();
        if RESERVED_MEMBERS.contains(&name) {
            return Err(SurfaceError::ReservedMember {
                member: name.to_string(),
            });
        }
        if let Some(forwarder) = self.table.get(name) {
            debug!(member = %name, "forwarding member write");
            return forwarder.write(&self.target, value);
        }
        // Preserved escape hatch: a non-exposed write lands on the surface
        // itself and can mask a typo in the member name.
        warn!(member = %name, "member not exposed; assigning locally on the surface");
        self.locals.insert(name.to_string(), value);
        Ok(())
    }

    fn reserved(&self, name: &str) -> Resolved {
        match name {
            "target" => Resolved::Target(self.target.clone()),
            "expose" => Resolved::Value(Value::List(
                self.table
                    .keys()
                    .map(|n| Value::Text(n.clone()))
                    .collect(),
            )),
            _ => Resolved::Value(Value::Text(self.doc.clone())),
        }
    }
}

impl fmt::Display for ExposureSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target.read().repr())
    }
}

impl fmt::Debug for ExposureSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExposureSurface")
            .field("expose", &self.members())
            .field("locals", &self.locals.len())
            .finish()
    }
}
