use crate::error::FormatError;
use crate::resolver::Resolver;
use crate::types::{Amount, FormatOptions, RenderFlags};

/// A resolver paired with the most recently resolved options
///
/// Convenient when one display switches locale or currency rarely and renders often.
/// Each instance keeps its own options, so give every thread its own formatter or
/// call [`render`](crate::render) with explicit options instead.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    resolver: Resolver,
    current: Option<FormatOptions>,
}

impl CurrencyFormatter {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            current: None,
        }
    }

    /// A formatter over the built-in dataset
    pub fn builtin() -> Self {
        Self::new(Resolver::builtin())
    }

    /// Resolve and keep the options for a locale and currency
    ///
    /// On error the previously resolved options stay in place.
    pub fn set(&mut self, locale: &str, currency: &str) -> Result<&FormatOptions, FormatError> {
        let options = self.resolver.resolve(locale, currency)?;
        Ok(&*self.current.insert(options))
    }

    /// Symbol from the last successful resolution
    pub fn current_symbol(&self) -> Option<&str> {
        self.current.as_ref().map(|options| options.symbol.as_str())
    }

    pub fn options(&self) -> Option<&FormatOptions> {
        self.current.as_ref()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Render with the current options; see [`render`](crate::render)
    pub fn render<'a>(&self, amount: impl Into<Amount<'a>>, show_symbol: bool, show00: bool) -> String {
        match &self.current {
            Some(options) => super::render(amount, options, RenderFlags::new(show_symbol, show00)),
            None => {
                log::warn!("Render called before any locale and currency were set");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    #[test]
    fn test_render_before_set() {
        let formatter = CurrencyFormatter::builtin();
        assert_eq!(formatter.current_symbol(), None);
        assert_eq!(formatter.render(1.0, true, true), "");
    }

    #[test]
    fn test_set_then_render() {
        let mut formatter = CurrencyFormatter::builtin();
        let options = formatter.set("de-DE", "EUR").unwrap().clone();
        assert_eq!(formatter.options(), Some(&options));
        assert_eq!(formatter.current_symbol(), Some("€"));
        assert_eq!(formatter.render(1234.5, true, true), "€1.234,50");
        assert_eq!(formatter.render(13, true, false), "€13");
        assert_eq!(formatter.render("12.10", false, false), "12,10");
    }

    #[test]
    fn test_failed_set_keeps_previous_options() {
        let mut formatter = CurrencyFormatter::builtin();
        formatter.set("en-US", "USD").unwrap();
        assert_eq!(
            formatter.set("en-US", ""),
            Err(FormatError::InvalidInput(Field::Currency))
        );
        assert_eq!(formatter.current_symbol(), Some("$"));
        assert_eq!(formatter.render(-1234.567, true, true), "$-1,234.57");
    }

    #[test]
    fn test_switching_currency() {
        let mut formatter = CurrencyFormatter::builtin();
        formatter.set("fr-FR", "EUR").unwrap();
        assert_eq!(formatter.render(1234567.891, true, true), "1 234 567,89 €");
        formatter.set("fr-FR", "xau").unwrap();
        assert_eq!(formatter.current_symbol(), Some("XAU"));
        assert_eq!(formatter.render(5, true, false), "5 XAU");
    }
}
