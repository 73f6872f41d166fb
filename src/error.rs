//! Error types for resolution, rendering and dataset loading

use std::fmt;

use thiserror::Error;

/// The input field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Locale,
    Currency,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Locale => f.write_str("locale"),
            Field::Currency => f.write_str("currency"),
        }
    }
}

/// Errors raised while resolving options or rendering an amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A locale or currency code was missing or empty
    #[error("Invalid input: {0} code is empty")]
    InvalidInput(Field),

    /// The amount did not parse to a finite number
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Errors raised while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Error parsing TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Error parsing JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error reading dataset: {0}")]
    Io(#[from] std::io::Error),
}
