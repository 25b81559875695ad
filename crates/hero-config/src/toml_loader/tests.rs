//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{ScenePreset, TimeMode};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hero_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, hero_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[transition]
target_url = "https://example.com/portfolio"
duration_ms = 1500

[scene]
preset = "gradient"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.transition.target_url, "https://example.com/portfolio");
    assert_eq!(config.transition.duration_ms, 1500);
    assert_eq!(config.scene.preset, ScenePreset::Gradient);
    // Defaults preserved
    assert!((config.transition.target_scale - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.animation.time_mode, TimeMode::Fixed);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, hero_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[animation]
time_step = 5.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.animation.time_step - 5.0).abs() < f64::EPSILON);
}

#[test]
fn create_default_config_writes_parseable_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Hero");
    assert_eq!(config.scene.preset, ScenePreset::Textured);
}

#[test]
fn default_config_path_ends_with_hero_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with(Path::new("hero").join("config.toml")));
    }
}

#[test]
fn config_path_is_nested_under_hero_dir() {
    let path = super::paths::config_path_in(Path::new("/home/me/.config"));
    assert_eq!(path, Path::new("/home/me/.config/hero/config.toml"));
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scene]\npreset = \"gradient\"\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.scene.preset, ScenePreset::Gradient);
}
