//! Config file loading and profile overrides

mod common;
use common::{setup, SceneBuilder};

use scenesheet::config::{write_default_config, Config};
use scenesheet::{report_for, ConfigError, SceneDocument};
use tempfile::TempDir;

#[test]
fn test_load_config_from_path() {
    setup("debug");
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
log_level = "debug"
default_format = "json"
color = false
"#,
    )
    .unwrap();

    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.default_format, "json");
    assert!(!config.color);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_write_default_config_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    write_default_config(&path).unwrap();
    let config = Config::from_path(&path).unwrap();
    assert_eq!(config, Config::default());

    assert!(matches!(
        write_default_config(&path),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
fn test_version_rule_changes_report_profile() {
    let config = Config::from_toml_str(
        r##"
[profiles.rack]
base = "xair"

[[versions]]
prefix = "#4.0#"
profile = "rack"
"##,
    )
    .unwrap();
    let registry = config.registry().unwrap();

    let scene = SceneDocument::parse(&SceneBuilder::x32().build());
    assert_eq!(registry.for_version(&scene.version).unwrap().name, "rack");

    // the rack profile reads the compact layout, which this scene lacks
    assert!(report_for(&SceneBuilder::x32().build(), &registry).is_err());
}

#[test]
fn test_fixed_source_override_reaches_report() {
    let config = Config::from_toml_str(
        r#"
[profiles.x32]
fixed_sources = [
    { id = 39, name = "Playback L" },
    { id = 40, name = "Playback R" },
]
"#,
    )
    .unwrap();
    let report = report_for(&SceneBuilder::x32().build(), &config.registry().unwrap()).unwrap();
    let aux = report.table("Aux").unwrap();
    assert_eq!(aux.cell(6, "physical").unwrap().display(), "39: Playback L");
}
