//! Configuration-driven surface construction

use super::test_utils::sample_plugin;
use anyhow::Result;
use aperture::config::ApertureConfig;
use aperture::registry::SurfaceRegistry;
use std::fs;

const CONFIG: &str = r#"
[logging]
level = "warn"

[plugins.Collapse]
expose = ["zoom", "color"]

[plugins.Slice]
expose = ["state"]
"#;

#[test]
fn test_registry_built_from_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("aperture.toml");
    fs::write(&path, CONFIG)?;

    let config = ApertureConfig::load_from_file(&path)?;

    let mut registry = SurfaceRegistry::new();
    let (collapse, _, _) = sample_plugin("Collapse");
    let (slice, _, _) = sample_plugin("Slice");
    registry.register_target(collapse, config.expose_for("Collapse"));
    registry.register_target(slice, config.expose_for("Slice"));

    assert_eq!(
        registry.get_or_error("Collapse")?.members(),
        vec!["color", "open_in_tray", "show", "zoom"]
    );
    assert_eq!(
        registry.get_or_error("Slice")?.members(),
        vec!["open_in_tray", "show", "state"]
    );
    Ok(())
}

#[test]
fn test_undeclared_plugin_gets_only_fixed_names() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("aperture.toml");
    fs::write(&path, CONFIG)?;

    let config = ApertureConfig::load_from_file(&path)?;

    let mut registry = SurfaceRegistry::new();
    let (ghost, _, _) = sample_plugin("Ghost");
    registry.register_target(ghost, config.expose_for("Ghost"));

    assert_eq!(
        registry.get_or_error("Ghost")?.members(),
        vec!["open_in_tray", "show"]
    );
    Ok(())
}

#[test]
fn test_logging_section_carried() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("aperture.toml");
    fs::write(&path, CONFIG)?;

    let config = ApertureConfig::load_from_file(&path)?;
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "text");
    Ok(())
}
