//! Plugin surface behavior: always-exposed names and label representation

use super::test_utils::sample_plugin;
use anyhow::Result;
use aperture::surface::plugin::{PluginSurface, ALWAYS_EXPOSED};
use aperture::target::Target;
use aperture::value::Value;

#[test]
fn test_disjoint_exposure_lists_both_carry_fixed_names() {
    let (first, _, _) = sample_plugin("Collapse");
    let (second, _, _) = sample_plugin("Slice");

    let first_api = PluginSurface::new(first, ["zoom"]);
    let second_api = PluginSurface::new(second, ["color"]);

    for api in [&first_api, &second_api] {
        for name in ALWAYS_EXPOSED {
            assert!(api.members().contains(&name), "{} missing", name);
        }
    }
    assert!(first_api.members().contains(&"zoom"));
    assert!(!second_api.members().contains(&"zoom"));
}

#[test]
fn test_label_representation_never_matches_target_repr() {
    let (plugin, _, _) = sample_plugin("Collapse");
    let raw_repr = plugin.repr();
    let api = PluginSurface::new(plugin, ["zoom"]);

    assert_eq!(api.to_string(), "<Collapse API>");
    assert_ne!(api.to_string(), raw_repr);
}

#[test]
fn test_plugin_doc_includes_target_doc() {
    let (plugin, _, _) = sample_plugin("Collapse");
    let api = PluginSurface::new(plugin, ["zoom"]);

    assert!(api.doc().contains("internal plugin"));
    assert!(api.doc().contains("\n\n\n"));
    assert!(api.doc().ends_with("The Collapse plugin."));
}

#[test]
fn test_capability_dispatch_through_plugin_surface() -> Result<()> {
    let (plugin, select, sync) = sample_plugin("Collapse");
    let mut api = PluginSurface::new(plugin, ["color", "state"]);

    api.set("color", "green")?;
    api.set("state", 5i64)?;

    assert_eq!(select.read().selected, Value::Text("green".to_string()));
    assert_eq!(sync.read().resets, 1);
    Ok(())
}

#[test]
fn test_always_exposed_members_are_writable() -> Result<()> {
    let (plugin, _, _) = sample_plugin("Collapse");
    let mut api = PluginSurface::new(plugin, Vec::<String>::new());

    api.set("open_in_tray", true)?;
    api.set("show", true)?;

    assert_eq!(api.get("open_in_tray")?.into_value(), Some(Value::Bool(true)));
    assert_eq!(api.get("show")?.into_value(), Some(Value::Bool(true)));
    Ok(())
}
