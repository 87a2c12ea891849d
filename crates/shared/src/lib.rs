pub mod domain;
pub mod error;
pub mod locale;

pub use domain::{Category, CategoryFilter, DailySummary, NewsItem, NewsResponse};
pub use error::{ErrorKind, PreconditionError};
pub use locale::{Language, Translations};
