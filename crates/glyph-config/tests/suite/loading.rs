use std::path::Path;

use glyph_config::{ConfigError, GlyphConfig};
use glyph_fuzzy::SearchPrecision;
use tempfile::tempdir;

#[test]
fn loads_every_section_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glyph.toml");
    std::fs::write(
        &path,
        r#"
[catalog]
path = "fluent.json"

[search]
precision = "low"
font_family = "Segoe MDL2 Assets"
icon_path = "assets/app.png"

[logging]
level = "debug"
json = true
stderr = false
"#,
    )
    .unwrap();

    let config = GlyphConfig::load_from_path(&path).expect("config should load");

    assert_eq!(config.catalog.path, dir.path().join("fluent.json"));
    assert_eq!(config.search.precision, SearchPrecision::Low);
    assert_eq!(config.search.font_family, "Segoe MDL2 Assets");
    assert_eq!(config.search.icon_path, Path::new("assets/app.png"));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert!(!config.logging.stderr);
    assert_eq!(config.logging.file, None);
}

#[test]
fn absolute_catalog_path_is_kept() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("elsewhere").join("data.json");
    let path = dir.path().join("glyph.toml");
    std::fs::write(
        &path,
        format!("[catalog]\npath = {:?}\n", data.display().to_string()),
    )
    .unwrap();

    let config = GlyphConfig::load_from_path(&path).unwrap();
    assert_eq!(config.catalog.path, data);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = GlyphConfig::load_from_path(dir.path().join("nope.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("nope.toml"), "{path}"),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn invalid_precision_is_a_parse_error() {
    let err = GlyphConfig::load_from_str("[search]\nprecision = \"exact\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
}
