//! Delegate Capabilities
//!
//! Structural contracts a delegate bound at a member name may satisfy, and
//! the tagged `Delegate` value that carries the capability discriminant.
//! Capability checks are membership tests on the tag, never runtime type
//! inspection, so the write dispatch over delegates is exhaustive.

use crate::surface::ExposureSurface;
use crate::value::Value;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a selection component.
pub type SharedSelect = Arc<RwLock<dyn Selectable + Send + Sync>>;

/// Shared handle to a synchronized-state component.
pub type SharedSync = Arc<RwLock<dyn SyncState + Send + Sync>>;

/// Shared handle to an opaque component with no write capability.
pub type SharedComponent = Arc<RwLock<dyn Component + Send + Sync>>;

/// Base contract every component delegate satisfies.
///
/// A component may publish its own curated surface; reads through an outer
/// surface substitute that nested surface for the raw component.
pub trait Component {
    /// Curated surface this component publishes for nested access, if any.
    fn user_api(&self) -> Option<ExposureSurface> {
        None
    }
}

/// A component owning a logical selection.
///
/// Writes through a surface set the selection in place; the target's own
/// binding for the member is never replaced.
pub trait Selectable: Component {
    fn selected(&self) -> Value;
    fn set_selected(&mut self, value: Value);
}

/// A component owning a possibly-divergent state value.
///
/// Writing a value equal to the current one forces the component back to a
/// single canonical value instead of silently doing nothing.
pub trait SyncState: Component {
    fn value(&self) -> Value;
    fn set_value(&mut self, value: Value);
    /// Collapse divergent internal state onto one canonical value. Idempotent.
    fn reset_to_unmixed(&mut self);
}

/// What a target currently binds at a member name.
#[derive(Clone)]
pub enum Delegate {
    /// Plain data value, read and written in place.
    Value(Value),
    /// Selection component; writes land on its selection.
    Select(SharedSelect),
    /// Synchronized-state component; writes assign or force an unmix.
    Sync(SharedSync),
    /// Opaque component with neither write capability.
    Object(SharedComponent),
}

impl Delegate {
    /// Wrap a plain value.
    pub fn plain(value: impl Into<Value>) -> Self {
        Delegate::Value(value.into())
    }

    /// Wrap an owned selection component in a shared handle.
    pub fn select<C>(component: C) -> Self
    where
        C: Selectable + Send + Sync + 'static,
    {
        Delegate::Select(Arc::new(RwLock::new(component)))
    }

    /// Wrap an owned synchronized-state component in a shared handle.
    pub fn sync<C>(component: C) -> Self
    where
        C: SyncState + Send + Sync + 'static,
    {
        Delegate::Sync(Arc::new(RwLock::new(component)))
    }

    /// Wrap an owned opaque component in a shared handle.
    pub fn object<C>(component: C) -> Self
    where
        C: Component + Send + Sync + 'static,
    {
        Delegate::Object(Arc::new(RwLock::new(component)))
    }

    /// Capability tag name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Delegate::Value(_) => "value",
            Delegate::Select(_) => "select",
            Delegate::Sync(_) => "sync",
            Delegate::Object(_) => "object",
        }
    }
}

impl fmt::Debug for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delegate::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Delegate::Select(_) => f.write_str("Select(..)"),
            Delegate::Sync(_) => f.write_str("Sync(..)"),
            Delegate::Object(_) => f.write_str("Object(..)"),
        }
    }
}
