use std::sync::Arc;

use rand::Rng;

use crate::render::{Renderer, View};
use crate::repository::QuoteRepository;
use crate::storage::{KeyValueStore, FILTER_KEY, LAST_VIEWED_KEY};
use crate::types::{CategoryFilter, Quote, QuoteError};

/// Quotes visible under `filter`, in collection order.
pub fn active_subset<'a>(quotes: &'a [Quote], filter: &CategoryFilter) -> Vec<&'a Quote> {
    quotes.iter().filter(|quote| filter.matches(quote)).collect()
}

/// Uniform pick over `subset`. `None` means there is nothing to show.
pub fn pick_random<'a, R: Rng + ?Sized>(subset: &[&'a Quote], rng: &mut R) -> Option<&'a Quote> {
    if subset.is_empty() {
        return None;
    }
    Some(subset[rng.gen_range(0..subset.len())])
}

/// Keeps the filter state and the last viewed quote, and drives the renderer.
pub struct Selector {
    persistent: Arc<dyn KeyValueStore + Send + Sync>,
    session: Arc<dyn KeyValueStore + Send + Sync>,
    renderer: Arc<dyn Renderer>,
}

impl Selector {
    pub fn new(
        persistent: Arc<dyn KeyValueStore + Send + Sync>,
        session: Arc<dyn KeyValueStore + Send + Sync>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            persistent,
            session,
            renderer,
        }
    }

    /// The persisted filter; `"all"` when nothing was stored or the read fails.
    pub fn selected_category(&self) -> CategoryFilter {
        match self.persistent.get(FILTER_KEY) {
            Ok(Some(value)) => CategoryFilter::from(value.as_str()),
            Ok(None) => CategoryFilter::All,
            Err(err) => {
                log::warn!("failed to read category filter: {:#}", err);
                CategoryFilter::All
            }
        }
    }

    pub fn set_category(&self, filter: &CategoryFilter) -> Result<(), QuoteError> {
        self.persistent.set(FILTER_KEY, filter.as_str())?;
        Ok(())
    }

    pub fn show_random(&self, quotes: &[Quote]) -> View {
        self.show_random_with(quotes, &mut rand::thread_rng())
    }

    pub fn show_random_with<R: Rng + ?Sized>(&self, quotes: &[Quote], rng: &mut R) -> View {
        let filter = self.selected_category();
        let subset = active_subset(quotes, &filter);

        let view = match pick_random(&subset, rng) {
            Some(quote) => {
                let line = quote.to_string();
                if let Err(err) = self.session.set(LAST_VIEWED_KEY, &line) {
                    log::warn!("failed to remember last viewed quote: {:#}", err);
                }
                View::Quote(line)
            }
            None => View::Empty,
        };

        self.renderer.show(&view);
        view
    }

    /// Re-show the quote last displayed in this session, without picking.
    pub fn resume(&self) -> Option<View> {
        let line = match self.session.get(LAST_VIEWED_KEY) {
            Ok(line) => line?,
            Err(err) => {
                log::warn!("failed to read last viewed quote: {:#}", err);
                return None;
            }
        };
        let view = View::Quote(line);
        self.renderer.show(&view);
        Some(view)
    }

    pub fn last_viewed(&self) -> Option<String> {
        self.session.get(LAST_VIEWED_KEY).ok().flatten()
    }

    pub fn refresh_categories(&self, repository: &QuoteRepository) {
        let selected = self.selected_category();
        self.renderer
            .categories(&repository.category_options(), &selected);
    }
}
