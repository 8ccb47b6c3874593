//! Per-member forwarders.
//!
//! Each exposed name gets one getter/setter pair at surface construction.
//! Reads unwrap nested surfaces; writes dispatch on the capability tag of
//! the delegate currently bound at the name, in fixed priority order.

use crate::capability::Delegate;
use crate::error::SurfaceError;
use crate::surface::Resolved;
use crate::target::SharedTarget;
use crate::value::Value;
use tracing::trace;

/// Getter/setter pair forwarding one exposed member name to the target.
#[derive(Debug, Clone)]
pub(crate) struct Forwarder {
    name: String,
}

impl Forwarder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Forwarder { name: name.into() }
    }

    /// Fetch the delegate from the target, substituting the nested surface
    /// when the delegate publishes one.
    pub(crate) fn read(&self, target: &SharedTarget) -> Result<Resolved, SurfaceError> {
        let delegate = target.read().get(&self.name).ok_or_else(|| {
            SurfaceError::NotFound {
                member: self.name.clone(),
            }
        })?;
        trace!(member = %self.name, kind = delegate.kind(), "read forwarded to target");

        Ok(match delegate {
            Delegate::Value(value) => Resolved::Value(value),
            Delegate::Select(component) => {
                let nested = component.read().user_api();
                match nested {
                    Some(surface) => Resolved::Surface(surface),
                    None => Resolved::Select(component),
                }
            }
            Delegate::Sync(component) => {
                let nested = component.read().user_api();
                match nested {
                    Some(surface) => Resolved::Surface(surface),
                    None => Resolved::Sync(component),
                }
            }
            Delegate::Object(component) => {
                let nested = component.read().user_api();
                match nested {
                    Some(surface) => Resolved::Surface(surface),
                    None => Resolved::Object(component),
                }
            }
        })
    }

    /// Dispatch a write on the capability of the current delegate.
    ///
    /// The current value is fetched first; a capability diverts the write
    /// into the component, otherwise the target binding is assigned.
    pub(crate) fn write(&self, target: &SharedTarget, value: Value) -> Result<(), SurfaceError> {
        let existing = target.read().get(&self.name).ok_or_else(|| {
            SurfaceError::NotFound {
                member: self.name.clone(),
            }
        })?;

        match existing {
            Delegate::Select(component) => {
                trace!(member = %self.name, "write diverted to selection component");
                component.write().set_selected(value);
                Ok(())
            }
            Delegate::Sync(component) => {
                let current = component.read().value();
                if value == current {
                    trace!(member = %self.name, "unchanged value; forcing unmix");
                    component.write().reset_to_unmixed();
                } else {
                    trace!(member = %self.name, "write diverted to sync component");
                    component.write().set_value(value);
                }
                Ok(())
            }
            Delegate::Value(_) | Delegate::Object(_) => {
                trace!(member = %self.name, "write forwarded to target");
                target.write().set(&self.name, value);
                Ok(())
            }
        }
    }
}
