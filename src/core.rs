use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::notifier::Notifier;
use crate::remote::{QuoteSource, RemoteSync, SyncOutcome};
use crate::render::{Renderer, View};
use crate::repository::QuoteRepository;
use crate::selector::Selector;
use crate::storage::KeyValueStore;
use crate::types::{CategoryFilter, Quote, QuoteError};

pub const QUOTE_ADDED_MESSAGE: &str = "Quote added successfully!";
pub const IMPORT_OK_MESSAGE: &str = "Quotes imported successfully!";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid file format.";

/// External collaborators of a [`QuoteManager`].
pub struct Collaborators {
    pub persistent: Arc<dyn KeyValueStore + Send + Sync>,
    pub session: Arc<dyn KeyValueStore + Send + Sync>,
    pub source: Arc<dyn QuoteSource>,
    pub renderer: Arc<dyn Renderer>,
    pub notifier: Arc<dyn Notifier>,
}

/// Entry point for every user trigger. Owns the repository behind a mutex so
/// the timer, the REST handlers and the CLI share one working copy.
pub struct QuoteManager {
    repository: Arc<Mutex<QuoteRepository>>,
    selector: Arc<Selector>,
    sync: Arc<RemoteSync>,
    notifier: Arc<dyn Notifier>,
}

impl QuoteManager {
    pub fn new(parts: Collaborators) -> Self {
        let repository = Arc::new(Mutex::new(QuoteRepository::new(parts.persistent.clone())));
        let selector = Arc::new(Selector::new(
            parts.persistent,
            parts.session,
            parts.renderer,
        ));
        let sync = Arc::new(RemoteSync::new(
            parts.source,
            repository.clone(),
            selector.clone(),
            parts.notifier.clone(),
        ));

        Self {
            repository,
            selector,
            sync,
            notifier: parts.notifier,
        }
    }

    fn repository(&self) -> MutexGuard<'_, QuoteRepository> {
        self.repository
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Rebuild the working copy from the persistent store.
    pub fn load(&self) {
        let mut repository = self.repository();
        repository.load();
        log::info!("📚 {} quotes loaded", repository.len());
    }

    /// Load, publish the category list, then re-show the session's last
    /// quote or pick a first one.
    pub fn start(&self) -> View {
        self.load();
        let repository = self.repository();
        self.selector.refresh_categories(&repository);

        match self.selector.resume() {
            Some(view) => view,
            None => self.selector.show_random(repository.quotes()),
        }
    }

    pub fn sync(&self) -> Arc<RemoteSync> {
        self.sync.clone()
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.repository().quotes().to_vec()
    }

    /// Selected filter and the options a picker should show.
    pub fn categories(&self) -> (CategoryFilter, Vec<String>) {
        let options = self.repository().category_options();
        (self.selector.selected_category(), options)
    }

    /// Re-show the quote last displayed in this session; pick one when the
    /// session has none yet.
    pub fn current_quote(&self) -> View {
        if let Some(view) = self.selector.resume() {
            return view;
        }
        let repository = self.repository();
        self.selector.show_random(repository.quotes())
    }

    pub fn next_quote(&self) -> View {
        let repository = self.repository();
        self.selector.show_random(repository.quotes())
    }

    pub fn change_filter(&self, category: &str) -> Result<View, QuoteError> {
        let filter = CategoryFilter::from(category);
        self.selector.set_category(&filter)?;
        log::info!("🗂️ filter set to {}", filter);

        let repository = self.repository();
        self.selector.refresh_categories(&repository);
        Ok(self.selector.show_random(repository.quotes()))
    }

    pub fn submit_quote(&self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let mut repository = self.repository();
        match repository.add_local(text, category) {
            Ok(quote) => {
                self.selector.refresh_categories(&repository);
                self.notifier.notify(QUOTE_ADDED_MESSAGE, false);
                Ok(quote)
            }
            Err(err) => {
                self.notifier.notify(&err.to_string(), true);
                Err(err)
            }
        }
    }

    pub fn export_json(&self) -> Result<String, QuoteError> {
        self.repository().export_json()
    }

    pub fn import_json(&self, raw: &str) -> Result<usize, QuoteError> {
        let mut repository = self.repository();
        match repository.import_json(raw) {
            Ok(count) => {
                log::info!("📥 imported {} quotes", count);
                self.selector.refresh_categories(&repository);
                self.notifier.notify(IMPORT_OK_MESSAGE, false);
                Ok(count)
            }
            Err(err @ QuoteError::Format(_)) => {
                log::warn!("import rejected: {}", err);
                self.notifier.notify(INVALID_FORMAT_MESSAGE, true);
                Err(err)
            }
            Err(err) => {
                self.notifier
                    .notify(&format!("Error reading file: {}", err), true);
                Err(err)
            }
        }
    }

    pub async fn sync_now(&self) -> SyncOutcome {
        self.sync.run_sync().await
    }

    pub async fn push_now(&self) -> bool {
        self.sync.push_local().await
    }
}
