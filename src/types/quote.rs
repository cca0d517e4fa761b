use std::fmt;

use serde::{Deserialize, Serialize};

/// Category assigned to every quote mapped from the remote source.
pub const SERVER_CATEGORY: &str = "Server";

/// A `(text, category)` pair. Two quotes are the same quote when both fields
/// match byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    pub fn from_server(text: impl Into<String>) -> Self {
        Self::new(text, SERVER_CATEGORY)
    }
}

/// Display form, also what gets mirrored as the last viewed quote.
impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only limit to our realization of tomorrow is our doubts of today.",
            "Inspiration",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new(
            "Do not go where the path may lead, go instead where there is no path and leave a trail.",
            "Adventure",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_text_in_quotes_and_appends_category() {
        let quote = Quote::new("Stay hungry.", "Life");
        assert_eq!(quote.to_string(), "\"Stay hungry.\" — Life");
    }

    #[test]
    fn identity_is_case_and_whitespace_sensitive() {
        let a = Quote::new("A", "X");
        assert_eq!(a, Quote::new("A", "X"));
        assert_ne!(a, Quote::new("a", "X"));
        assert_ne!(a, Quote::new("A ", "X"));
        assert_ne!(a, Quote::new("A", "Server"));
    }

    #[test]
    fn serializes_with_text_and_category_fields() {
        let json = serde_json::to_string(&Quote::from_server("hello")).unwrap();
        assert_eq!(json, r#"{"text":"hello","category":"Server"}"#);
    }

    #[test]
    fn seed_quotes_are_three_distinct_categories() {
        let seeds = seed_quotes();
        let categories: Vec<&str> = seeds.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(categories, vec!["Inspiration", "Life", "Adventure"]);
    }
}
