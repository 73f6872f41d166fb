use currency_format::locale::look_for;
use currency_format::{Dataset, DatasetError, FormatOptions, RenderFlags, Resolver, render};
use std::fs;

const JSON_DATASET: &str = r#"{
    "defaults": {
        "format": "%s%v",
        "decimal": ".",
        "thousand": ",",
        "noSymbolFormat": "%v %s"
    },
    "locales": {
        "f": { "%v %s": ["sv"], "%s%v": ["en"] },
        "d": { ",": ["sv"] },
        "t": { "\u00a0": ["sv"] }
    },
    "currencies": {
        "s": { "kr": ["SEK"], "$": ["USD"] }
    }
}"#;

#[test]
fn test_json_dataset() {
    let dataset = Dataset::from_json_str(JSON_DATASET).unwrap();
    assert_eq!(dataset.locales.f.keys().next().map(String::as_str), Some("%v %s"));

    let options = Resolver::new(dataset).resolve("sv", "sek").unwrap();
    assert_eq!(options, FormatOptions::new("%v %s", ",", " ", "kr"));
    assert_eq!(render(12345.678, &options, RenderFlags::default()), "12 345,68 kr");
}

#[test]
fn test_missing_tables_default() {
    let dataset = Dataset::from_json_str(r#"{ "currencies": { "s": { "€": ["EUR"] } } }"#).unwrap();
    let options = Resolver::new(dataset).resolve("de-DE", "EUR").unwrap();
    assert_eq!(options, FormatOptions::new("%s%v", ".", ",", "€"));
}

#[test]
fn test_dataset_from_path() {
    let dir = std::env::temp_dir().join(format!("currency-format-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let json_path = dir.join("data.json");
    fs::write(&json_path, JSON_DATASET).unwrap();
    let from_json = Dataset::from_path(&json_path).unwrap();
    assert_eq!(look_for(&from_json.currencies.s, "SEK"), Some("kr"));

    let toml_path = dir.join("data.toml");
    fs::write(&toml_path, "[currencies.s]\n\"£\" = [\"GBP\"]\n").unwrap();
    let from_toml = Dataset::from_path(&toml_path).unwrap();
    assert_eq!(look_for(&from_toml.currencies.s, "GBP"), Some("£"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_dataset_errors() {
    assert!(matches!(
        Dataset::from_toml_str("[currencies.s]\n\"$\" = \"USD\"\n"),
        Err(DatasetError::Toml(_))
    ));
    assert!(matches!(
        Dataset::from_json_str("{ \"defaults\": 3 }"),
        Err(DatasetError::Json(_))
    ));
    assert!(matches!(
        Dataset::from_path("/nonexistent/currency-data.toml"),
        Err(DatasetError::Io(_))
    ));
}

#[test]
fn test_builtin_dataset_is_shared() {
    assert!(std::ptr::eq(Dataset::builtin(), Dataset::builtin()));
    assert!(Dataset::builtin().validate().is_empty());
}
