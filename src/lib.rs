//! Aperture: Curated API Surfaces over Internal Plugin Objects
//!
//! A delegation facade that exposes a curated, stable set of member names
//! over an internal, mutable, possibly-nested object, forwarding permitted
//! reads and writes and applying capability-specific mutation semantics for
//! selection and synchronized-state delegates.

pub mod capability;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod surface;
pub mod target;
pub mod value;
