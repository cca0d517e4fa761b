//! Fakes shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::notifier::Notifier;
use crate::render::{Renderer, View};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::types::CategoryFilter;

/// In-memory store that counts writes per key and can be told to fail them.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: Mutex<HashMap<String, usize>>,
    fail_writes: bool,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn writes(&self, key: &str) -> usize {
        self.writes.lock().unwrap().get(key).copied().unwrap_or(0)
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("disk full");
        }
        *self.writes.lock().unwrap().entry(key.to_string()).or_default() += 1;
        self.inner.set(key, value)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(String, bool)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, bool)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(String, bool)> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, is_error: bool) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), is_error));
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub views: Mutex<Vec<View>>,
    pub options: Mutex<Vec<Vec<String>>>,
}

impl RecordingRenderer {
    pub fn views(&self) -> Vec<View> {
        self.views.lock().unwrap().clone()
    }

    pub fn option_refreshes(&self) -> usize {
        self.options.lock().unwrap().len()
    }
}

impl Renderer for RecordingRenderer {
    fn show(&self, view: &View) {
        self.views.lock().unwrap().push(view.clone());
    }

    fn categories(&self, options: &[String], _selected: &CategoryFilter) {
        self.options.lock().unwrap().push(options.to_vec());
    }
}
