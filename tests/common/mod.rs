#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quotesync::core::{Collaborators, QuoteManager};
use quotesync::notifier::Notifier;
use quotesync::remote::QuoteSource;
use quotesync::render::{Renderer, View};
use quotesync::storage::{KeyValueStore, MemoryStore, SqliteStore};
use quotesync::types::{CategoryFilter, Quote, QuoteError};

/// Remote source serving a fixed set of quotes and recording pushes.
#[derive(Default)]
pub struct ScriptedSource {
    pub remote: Mutex<Vec<Quote>>,
    pub pushes: Mutex<Vec<Vec<Quote>>>,
}

impl ScriptedSource {
    pub fn serving(quotes: Vec<Quote>) -> Arc<Self> {
        Arc::new(Self {
            remote: Mutex::new(quotes),
            ..Self::default()
        })
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        Ok(self.remote.lock().unwrap().clone())
    }

    async fn push(&self, quotes: &[Quote]) -> Result<(), QuoteError> {
        self.pushes.lock().unwrap().push(quotes.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct Collected {
    pub views: Mutex<Vec<View>>,
    pub notices: Mutex<Vec<(String, bool)>>,
}

impl Collected {
    pub fn last_notice(&self) -> Option<(String, bool)> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Renderer for Collected {
    fn show(&self, view: &View) {
        self.views.lock().unwrap().push(view.clone());
    }

    fn categories(&self, _options: &[String], _selected: &CategoryFilter) {}
}

impl Notifier for Collected {
    fn notify(&self, message: &str, is_error: bool) {
        self.notices
            .lock()
            .unwrap()
            .push((message.to_string(), is_error));
    }
}

pub fn sqlite_store(dir: &Path) -> Arc<SqliteStore> {
    let store = SqliteStore::new(dir.join("quotes.sqlite"));
    store.init().expect("init sqlite store");
    Arc::new(store)
}

pub fn manager(
    persistent: Arc<dyn KeyValueStore + Send + Sync>,
    source: Arc<dyn QuoteSource>,
    sink: Arc<Collected>,
) -> QuoteManager {
    QuoteManager::new(Collaborators {
        persistent,
        session: Arc::new(MemoryStore::new()),
        source,
        renderer: sink.clone(),
        notifier: sink,
    })
}
