use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::{Collaborators, QuoteManager};
use crate::notifier::LogNotifier;
use crate::remote::{HttpQuoteSource, QuoteSource};
use crate::render::Renderer;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::context;

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    std::fs::create_dir_all(&ctx.data_dir)?;
    Ok(())
}

pub fn init_store(ctx: &context::Context) -> Result<Arc<dyn KeyValueStore + Send + Sync>> {
    let sqlite = SqliteStore::new(ctx.db_path());
    if ctx.reset {
        sqlite.reset_all().context("resetting storage")?;
    }
    sqlite.init().context("initializing storage")?;
    Ok(Arc::new(sqlite))
}

pub fn build_source(ctx: &context::Context) -> Result<Arc<dyn QuoteSource>> {
    let source = HttpQuoteSource::new(
        ctx.remote_url.clone(),
        ctx.push_url.clone(),
        ctx.http_timeout,
    )
    .context("building HTTP client")?;
    Ok(Arc::new(source))
}

pub fn build_manager(
    store: Arc<dyn KeyValueStore + Send + Sync>,
    source: Arc<dyn QuoteSource>,
    renderer: Arc<dyn Renderer>,
) -> QuoteManager {
    QuoteManager::new(Collaborators {
        persistent: store,
        session: Arc::new(MemoryStore::new()),
        source,
        renderer,
        notifier: Arc::new(LogNotifier),
    })
}
