//! Surface registry lookup behavior

use super::test_utils::sample_plugin;
use anyhow::Result;
use aperture::error::SurfaceError;
use aperture::registry::SurfaceRegistry;
use aperture::value::Value;

#[test]
fn test_lookup_by_label() -> Result<()> {
    let mut registry = SurfaceRegistry::new();
    let (collapse, _, _) = sample_plugin("Collapse");
    let (slice, _, _) = sample_plugin("Slice");
    registry.register_target(collapse, ["zoom"]);
    registry.register_target(slice, ["color"]);

    assert_eq!(registry.labels(), vec!["Collapse", "Slice"]);
    let api = registry.get_or_error("Collapse")?;
    assert_eq!(api.to_string(), "<Collapse API>");
    Ok(())
}

#[test]
fn test_unknown_label_error() {
    let registry = SurfaceRegistry::new();
    let err = registry.get_or_error("Ghost").unwrap_err();
    assert!(matches!(err, SurfaceError::UnknownPlugin(label) if label == "Ghost"));
}

#[test]
fn test_mutation_through_registry() -> Result<()> {
    let mut registry = SurfaceRegistry::new();
    let (collapse, select, _) = sample_plugin("Collapse");
    registry.register_target(collapse, ["color"]);

    registry
        .get_mut("Collapse")
        .expect("registered surface")
        .set("color", "green")?;

    assert_eq!(select.read().selected, Value::Text("green".to_string()));
    Ok(())
}
