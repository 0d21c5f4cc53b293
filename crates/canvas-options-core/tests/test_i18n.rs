use std::io::Write;

use canvas_options_core::i18n::{Catalog, LabelKey, Localizer};

#[test]
fn test_english_covers_every_key() {
    let catalog = Catalog::english();
    for key in LabelKey::ALL {
        assert!(catalog.get(key.key()).is_some(), "missing {}", key.key());
    }
    assert_eq!(catalog.translate(LabelKey::TileSize), "Tile Size");
}

#[test]
fn test_missing_key_falls_back_to_key() {
    let catalog = Catalog::from_toml_str("[options]\ntileSize = \"Kachelgröße\"\n").unwrap();
    assert_eq!(catalog.translate(LabelKey::TileSize), "Kachelgröße");
    assert_eq!(
        catalog.translate(LabelKey::InfillMethod),
        "options:infillMethod"
    );
}

#[test]
fn test_namespaces_are_flattened() {
    let catalog =
        Catalog::from_toml_str("[options]\na = \"A\"\n[common]\nb = \"B\"\n").unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("options:a"), Some("A"));
    assert_eq!(catalog.get("common:b"), Some("B"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[options]\nscaledWidth = \"Largeur\"").unwrap();
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.translate(LabelKey::ScaledWidth), "Largeur");
}

#[test]
fn test_invalid_locale_is_error() {
    assert!(Catalog::from_toml_str("options = 3").is_err());
}
