mod category_filter;
mod quote;
mod quote_error;

pub use category_filter::CategoryFilter;
pub use quote::{seed_quotes, Quote, SERVER_CATEGORY};
pub use quote_error::QuoteError;

/// Message rendered when the active subset has no quotes.
pub const NO_QUOTES_MESSAGE: &str = "No quotes available in this category.";
