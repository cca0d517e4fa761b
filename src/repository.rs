use std::sync::Arc;

use serde_json::Value;

use crate::storage::{KeyValueStore, QUOTES_KEY};
use crate::types::{seed_quotes, CategoryFilter, Quote, QuoteError};

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both quote text and category.";

/// Owns the working copy of the quote collection. The persistent store is the
/// only durable copy; `load` rebuilds memory from it and every mutation ends
/// with a `save`.
pub struct QuoteRepository {
    store: Arc<dyn KeyValueStore + Send + Sync>,
    quotes: Vec<Quote>,
}

impl QuoteRepository {
    pub fn new(store: Arc<dyn KeyValueStore + Send + Sync>) -> Self {
        Self {
            store,
            quotes: Vec::new(),
        }
    }

    /// Replace the collection with the persisted one. Missing or unreadable
    /// data installs the seed quotes instead.
    pub fn load(&mut self) {
        self.quotes = match self.store.get(QUOTES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(quotes) => {
                    log::debug!("loaded {} quotes from store", quotes.len());
                    quotes
                }
                Err(err) => {
                    log::warn!("stored quotes are malformed, installing defaults: {}", err);
                    seed_quotes()
                }
            },
            Ok(None) => {
                log::debug!("no stored quotes, installing defaults");
                seed_quotes()
            }
            Err(err) => {
                log::warn!("failed to read stored quotes, installing defaults: {:#}", err);
                seed_quotes()
            }
        };
    }

    pub fn save(&self) -> Result<(), QuoteError> {
        let raw = serde_json::to_string(&self.quotes)
            .map_err(|err| QuoteError::Storage(err.to_string()))?;
        self.store.set(QUOTES_KEY, &raw)?;
        Ok(())
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn add_local(&mut self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.save_or_rollback(self.quotes.len() - 1)?;
        Ok(quote)
    }

    /// Append every element of an external JSON array. Elements are taken as
    /// they are: no trimming, no emptiness check, no dedup.
    pub fn import_bulk(&mut self, items: Value) -> Result<usize, QuoteError> {
        let Value::Array(items) = items else {
            return Err(QuoteError::Format(
                "expected a JSON array of quotes".to_string(),
            ));
        };
        let imported = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Quote>(item)
                    .map_err(|err| QuoteError::Format(format!("element {}: {}", index, err)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = imported.len();
        let before = self.quotes.len();
        self.quotes.extend(imported);
        self.save_or_rollback(before)?;
        Ok(count)
    }

    /// Persist, or drop everything past `keep` so a failed write leaves the
    /// working copy as it was.
    fn save_or_rollback(&mut self, keep: usize) -> Result<(), QuoteError> {
        if let Err(err) = self.save() {
            self.quotes.truncate(keep);
            return Err(err);
        }
        Ok(())
    }

    pub fn import_json(&mut self, raw: &str) -> Result<usize, QuoteError> {
        let items: Value =
            serde_json::from_str(raw).map_err(|err| QuoteError::Format(err.to_string()))?;
        self.import_bulk(items)
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.iter().any(|existing| existing == quote)
    }

    /// Append the quotes that have no exact match yet, in the given order.
    /// Does not save; returns what was appended.
    pub fn append_missing(&mut self, incoming: Vec<Quote>) -> Vec<Quote> {
        let mut appended = Vec::new();
        for quote in incoming {
            if !self.contains(&quote) {
                self.quotes.push(quote.clone());
                appended.push(quote);
            }
        }
        appended
    }

    /// Distinct categories in first-observed order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !seen.iter().any(|c| *c == quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    /// What a category picker shows: the `"all"` option followed by the
    /// observed categories.
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![CategoryFilter::ALL.to_string()];
        options.extend(self.categories());
        options
    }

    pub fn export_json(&self) -> Result<String, QuoteError> {
        serde_json::to_string_pretty(&self.quotes)
            .map_err(|err| QuoteError::Storage(err.to_string()))
    }
}
