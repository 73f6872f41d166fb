//! Locale and currency dataset
//!
//! This module holds the read-only tables the resolver searches: default format
//! settings, locale tables keyed by format/decimal/thousand value, and a currency
//! table keyed by symbol. Datasets load from TOML or JSON, and a built-in dataset
//! is embedded in the crate.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

type Result<T> = std::result::Result<T, DatasetError>;

/// A table mapping a literal value to the codes that use it
///
/// Insertion order is kept, so when two keys claim the same code the first one wins.
pub type CodeTable = IndexMap<String, Vec<String>>;

/// Fallback settings used when a locale has no entry of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub format: String,
    pub decimal: String,
    pub thousand: String,
    /// Pattern used when the currency has no known symbol
    #[serde(rename = "noSymbolFormat")]
    pub no_symbol_format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: "%s%v".to_string(),
            decimal: ".".to_string(),
            thousand: ",".to_string(),
            no_symbol_format: "%v %s".to_string(),
        }
    }
}

/// Locale tables: format patterns, decimal separators and thousands separators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTables {
    #[serde(default)]
    pub f: CodeTable,
    #[serde(default)]
    pub d: CodeTable,
    #[serde(default)]
    pub t: CodeTable,
}

/// Currency tables: symbols keyed to the currency codes that use them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTables {
    #[serde(default)]
    pub s: CodeTable,
}

/// The complete dataset searched by the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub locales: LocaleTables,
    #[serde(default)]
    pub currencies: CurrencyTables,
}

/// A code claimed by more than one key of the same table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMapping {
    /// Table name, e.g. `locales.t`
    pub table: &'static str,
    pub code: String,
    /// Every key claiming the code, in table order; the first is the one used
    pub keys: Vec<String>,
}

static BUILTIN_DATASET: OnceLock<Dataset> = OnceLock::new();

impl Dataset {
    /// Parse a dataset from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Parse a dataset from JSON
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load a dataset from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// The dataset embedded in the crate, parsed on first use
    pub fn builtin() -> &'static Dataset {
        BUILTIN_DATASET.get_or_init(|| {
            Self::from_toml_str(include_str!("locale/builtin.toml")).unwrap_or_else(|e| {
                log::warn!("Failed to load embedded currency dataset: {e}");
                Dataset::default()
            })
        })
    }

    /// List codes that more than one key of the same table claims
    pub fn validate(&self) -> Vec<DuplicateMapping> {
        let tables: [(&'static str, &CodeTable); 4] = [
            ("locales.f", &self.locales.f),
            ("locales.d", &self.locales.d),
            ("locales.t", &self.locales.t),
            ("currencies.s", &self.currencies.s),
        ];

        let mut duplicates = Vec::new();
        for (name, table) in tables {
            let mut claims: IndexMap<&str, Vec<String>> = IndexMap::new();
            for (key, codes) in table {
                for code in codes {
                    let keys = claims.entry(code.as_str()).or_default();
                    if !keys.contains(key) {
                        keys.push(key.clone());
                    }
                }
            }

            duplicates.extend(
                claims
                    .into_iter()
                    .filter(|(_, keys)| keys.len() > 1)
                    .map(|(code, keys)| DuplicateMapping {
                        table: name,
                        code: code.to_string(),
                        keys,
                    }),
            );
        }

        duplicates
    }
}

/// Find the first key whose code list contains `query`
///
/// Keys are scanned in table order, then each key's codes in order. Matching is exact.
pub fn look_for<'t>(table: &'t CodeTable, query: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(_, codes)| codes.iter().any(|code| code == query))
        .map(|(key, _)| key.as_str())
}

/// Collapse a locale whose region repeats its language, e.g. `de-DE` to `de`
///
/// The comparison is case-insensitive. Any other locale is returned unchanged.
pub fn normalize_locale(locale: &str) -> String {
    let mut parts = locale.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(language), Some(region), None) if language.eq_ignore_ascii_case(region) => {
            language.to_string()
        }
        _ => locale.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> CodeTable {
        entries
            .iter()
            .map(|(key, codes)| {
                (
                    key.to_string(),
                    codes.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_look_for_first_match_wins() {
        let t = table(&[(".", &["de", "nl"][..]), ("'", &["de-CH", "de"][..])]);
        assert_eq!(look_for(&t, "de"), Some("."));
        assert_eq!(look_for(&t, "de-CH"), Some("'"));
        assert_eq!(look_for(&t, "fr"), None);
    }

    #[test]
    fn test_look_for_is_exact() {
        let t = table(&[(",", &["de"][..])]);
        assert_eq!(look_for(&t, "DE"), None);
        assert_eq!(look_for(&t, "d"), None);
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("de-DE"), "de");
        assert_eq!(normalize_locale("hu-HU"), "hu");
        assert_eq!(normalize_locale("fr-fr"), "fr");
        assert_eq!(normalize_locale("de-CH"), "de-CH");
        assert_eq!(normalize_locale("en"), "en");
        assert_eq!(normalize_locale("de-DE-1996"), "de-DE-1996");
    }

    #[test]
    fn test_builtin_loads() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.defaults.no_symbol_format, "%v %s");
        assert!(!dataset.locales.f.is_empty(), "Should have loaded locale formats");
        assert_eq!(look_for(&dataset.currencies.s, "EUR"), Some("€"));
        assert!(
            dataset.validate().is_empty(),
            "Built-in data should not be ambiguous"
        );
    }

    #[test]
    fn test_validate_reports_duplicates() {
        let dataset = Dataset {
            currencies: CurrencyTables {
                s: table(&[("$", &["USD", "CAD"][..]), ("C$", &["CAD"][..])]),
            },
            ..Dataset::default()
        };
        let duplicates = dataset.validate();
        assert_eq!(
            duplicates,
            vec![DuplicateMapping {
                table: "currencies.s",
                code: "CAD".to_string(),
                keys: vec!["$".to_string(), "C$".to_string()],
            }]
        );
    }

    #[test]
    fn test_toml_keeps_table_order() {
        let dataset = Dataset::from_toml_str(
            r#"
            [locales.d]
            "," = ["de"]
            "." = ["de"]
            "#,
        )
        .unwrap();
        assert_eq!(look_for(&dataset.locales.d, "de"), Some(","));
        assert_eq!(dataset.defaults, Defaults::default());
    }
}
