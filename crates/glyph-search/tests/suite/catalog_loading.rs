use std::io::Cursor;

use glyph_search::{DataLoadError, IconCatalog};
use tempfile::tempdir;

#[test]
fn sample_catalog_preserves_source_order() {
    let catalog = super::sample_catalog();
    assert!(catalog.len() > 50);

    let first: Vec<_> = catalog.iter().take(3).map(|icon| icon.label()).collect();
    assert_eq!(first, ["GlobalNavButton", "Wifi", "Bluetooth"]);
    assert_eq!(catalog.all()[0].codepoint().value(), 0xE700);
}

#[test]
fn loads_from_a_reader() {
    let data = br#"[{"label": "Home", "value": 59407}]"#;
    let catalog = IconCatalog::load_from_reader(Cursor::new(&data[..])).unwrap();
    assert_eq!(catalog.get(0).unwrap().label(), "Home");
    assert_eq!(catalog.get(0).unwrap().codepoint().hex(), "E80F");
}

#[test]
fn missing_file_is_a_data_load_error() {
    let dir = tempdir().unwrap();
    let err = IconCatalog::load_from_path(dir.path().join("data.json")).unwrap_err();
    match err {
        DataLoadError::Io { path, .. } => assert!(path.ends_with("data.json"), "{path}"),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn record_missing_value_yields_no_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"[
  {"Label": "GlobalNavButton", "Value": 59136},
  {"Label": "Wifi", "Value": 59137},
  {"Label": "Bluetooth"}
]"#,
    )
    .unwrap();

    let err = IconCatalog::load_from_path(&path).unwrap_err();
    assert!(matches!(err, DataLoadError::Json(_)), "{err:?}");
    assert!(err.to_string().contains("Value"), "{err}");
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"[{"Label": "Wifi", "Value": 59137}, {"Label": "Blu"#).unwrap();

    assert!(matches!(
        IconCatalog::load_from_path(&path),
        Err(DataLoadError::Json(_))
    ));
}

#[test]
fn out_of_range_value_is_rejected() {
    let err =
        IconCatalog::from_json_str(r#"[{"Label": "TooBig", "Value": 1114112}]"#).unwrap_err();
    assert!(matches!(err, DataLoadError::Codepoint { index: 0, .. }), "{err:?}");
}

#[test]
fn empty_array_is_an_empty_catalog() {
    let catalog = IconCatalog::from_json_str("[]").unwrap();
    assert!(catalog.is_empty());
}
