//! Resolution of (locale, currency) pairs into format options

use std::collections::HashMap;

use crate::error::{Field, FormatError};
use crate::locale::{CodeTable, Dataset, normalize_locale};
use crate::types::FormatOptions;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Inverse of a [`CodeTable`]: code to value
///
/// Only the first key that claims a code is recorded, which gives the same answer
/// as [`look_for`](crate::locale::look_for) without scanning the table.
#[derive(Debug, Clone, Default)]
struct CodeIndex {
    values: HashMap<String, String>,
}

impl CodeIndex {
    fn build(table: &CodeTable) -> Self {
        let mut values = HashMap::new();
        for (value, codes) in table {
            for code in codes {
                values
                    .entry(code.clone())
                    .or_insert_with(|| value.clone());
            }
        }
        Self { values }
    }

    fn get(&self, code: &str) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }
}

/// Resolves locale and currency codes against a dataset
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    dataset: Dataset,
    formats: CodeIndex,
    decimals: CodeIndex,
    thousands: CodeIndex,
    symbols: CodeIndex,
}

impl Resolver {
    /// Create a resolver, indexing every table of the dataset
    pub fn new(dataset: Dataset) -> Self {
        Self {
            formats: CodeIndex::build(&dataset.locales.f),
            decimals: CodeIndex::build(&dataset.locales.d),
            thousands: CodeIndex::build(&dataset.locales.t),
            symbols: CodeIndex::build(&dataset.currencies.s),
            dataset,
        }
    }

    /// Create a resolver over the built-in dataset
    pub fn builtin() -> Self {
        Self::new(Dataset::builtin().clone())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Resolve the format options for a locale and currency
    ///
    /// # Arguments
    /// * `locale` - Locale code such as `de-DE` or `fr`
    /// * `currency` - Currency code such as `EUR`, in any case
    ///
    /// # Returns
    /// * `Result<FormatOptions, FormatError>` - The options, or `InvalidInput` when
    ///   either code is empty
    ///
    /// # Examples
    /// ```
    /// use currency_format::Resolver;
    ///
    /// let options = Resolver::builtin().resolve("de-DE", "eur").unwrap();
    /// assert_eq!(options.symbol, "€");
    /// assert_eq!(options.decimal, ",");
    /// ```
    pub fn resolve(&self, locale: &str, currency: &str) -> Result<FormatOptions, FormatError> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(FormatError::InvalidInput(Field::Currency));
        }
        let locale = locale.trim();
        if locale.is_empty() {
            return Err(FormatError::InvalidInput(Field::Locale));
        }

        let currency = currency.to_uppercase();
        let locale = normalize_locale(locale);
        let defaults = &self.dataset.defaults;

        let mut format = self
            .formats
            .get(&locale)
            .unwrap_or_else(|| {
                log::debug!("No format for locale {locale}, using default");
                defaults.format.as_str()
            })
            .to_string();

        let decimal = self.decimals.get(&locale).unwrap_or_else(|| {
            log::debug!("No decimal separator for locale {locale}, using default");
            defaults.decimal.as_str()
        });

        let thousand = self.thousands.get(&locale).unwrap_or_else(|| {
            log::debug!("No thousands separator for locale {locale}, using default");
            defaults.thousand.as_str()
        });

        // A missing symbol replaces the locale format too, not only the symbol
        let symbol = match self.symbols.get(&currency) {
            Some(symbol) => symbol.to_string(),
            None => {
                log::debug!("No symbol for currency {currency}, using the code");
                format = defaults.no_symbol_format.clone();
                currency
            }
        };

        Ok(FormatOptions {
            format,
            decimal: plain_spaces(decimal),
            thousand: plain_spaces(thousand),
            symbol,
        })
    }
}

fn plain_spaces(separator: &str) -> String {
    separator.replace(NO_BREAK_SPACE, " ")
}
