pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod resolver;
pub mod types;

// 导出主要 API
pub use error::{DatasetError, Field, FormatError};
pub use formatter::{CurrencyFormatter, render, try_render};
pub use locale::Dataset;
pub use resolver::Resolver;
pub use types::*;
