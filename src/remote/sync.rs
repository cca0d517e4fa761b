use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use ::tracing::Instrument;
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::QuoteSource;
use crate::notifier::Notifier;
use crate::repository::QuoteRepository;
use crate::selector::Selector;
use crate::types::Quote;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch quotes from server.";
pub const NEW_QUOTES_MESSAGE: &str = "New quotes added from server.";
pub const NO_NEW_QUOTES_MESSAGE: &str = "No new quotes from server.";
pub const PUSH_OK_MESSAGE: &str = "Quotes pushed to server.";
pub const PUSH_FAILED_MESSAGE: &str = "Failed to push quotes to server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "added", rename_all = "camelCase")]
pub enum SyncOutcome {
    /// This many remote quotes were new and got appended.
    Added(usize),
    NoChange,
    /// Another sync was already running; this one did nothing.
    Skipped,
}

/// Clears the in-flight flag when a run ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One-way, additive reconciliation between the local collection and a
/// remote source, plus a best-effort push of the local set.
pub struct RemoteSync {
    source: Arc<dyn QuoteSource>,
    repository: Arc<Mutex<QuoteRepository>>,
    selector: Arc<Selector>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicBool,
}

impl RemoteSync {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        repository: Arc<Mutex<QuoteRepository>>,
        selector: Arc<Selector>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            repository,
            selector,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    fn repository(&self) -> MutexGuard<'_, QuoteRepository> {
        self.repository
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Never fails: any error is reported and becomes an empty result.
    pub async fn fetch_remote(&self) -> Vec<Quote> {
        match self.source.fetch().await {
            Ok(quotes) => quotes,
            Err(err) => {
                log::warn!("remote fetch failed: {}", err);
                self.notifier.notify(FETCH_FAILED_MESSAGE, true);
                Vec::new()
            }
        }
    }

    pub fn merge(&self, remote: Vec<Quote>) -> SyncOutcome {
        let mut repository = self.repository();
        let appended = repository.append_missing(remote);

        if appended.is_empty() {
            self.notifier.notify(NO_NEW_QUOTES_MESSAGE, false);
            return SyncOutcome::NoChange;
        }

        log::info!("🔄 merged {} new quotes", appended.len());
        let saved = repository.save();
        self.selector.refresh_categories(&repository);
        self.selector.show_random(repository.quotes());

        match saved {
            Ok(()) => self.notifier.notify(NEW_QUOTES_MESSAGE, false),
            Err(err) => {
                log::error!("failed to save merged quotes: {}", err);
                self.notifier
                    .notify(&format!("Failed to save quotes: {}", err), true);
            }
        }
        SyncOutcome::Added(appended.len())
    }

    /// Returns whether the remote accepted the push.
    pub async fn push_local(&self) -> bool {
        let snapshot = self.repository().quotes().to_vec();
        match self.source.push(&snapshot).await {
            Ok(()) => {
                log::info!("⬆️ pushed {} quotes", snapshot.len());
                self.notifier.notify(PUSH_OK_MESSAGE, false);
                true
            }
            Err(err) => {
                log::warn!("remote push failed: {}", err);
                self.notifier.notify(PUSH_FAILED_MESSAGE, true);
                false
            }
        }
    }

    /// Fetch then merge. A call made while another run is in flight returns
    /// `Skipped` instead of interleaving with it.
    pub async fn run_sync(&self) -> SyncOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::info!("⏭️ sync already in progress, skipping");
            return SyncOutcome::Skipped;
        }
        let _guard = InFlight(&self.in_flight);

        async {
            let remote = self.fetch_remote().await;
            self.merge(remote)
        }
        .instrument(::tracing::info_span!("run_sync"))
        .await
    }

    /// Fire `run_sync` every `period` until `shutdown`. The first tick is one
    /// period after the call. Each tick runs in its own task so a slow run
    /// does not delay the schedule; runs still going at shutdown are awaited
    /// before this returns.
    pub async fn run_periodic(self: Arc<Self>, period: Duration, shutdown: CancellationToken) {
        log::info!("⏱️ periodic sync every {}s", period.as_secs());
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut runs: Vec<JoinHandle<SyncOutcome>> = Vec::new();

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    runs.retain(|run| !run.is_finished());
                    let sync = self.clone();
                    runs.push(tokio::spawn(async move { sync.run_sync().await }));
                }
            }
        }

        runs.retain(|run| !run.is_finished());
        if !runs.is_empty() {
            log::info!("⏳ waiting for {} sync run(s) to finish", runs.len());
        }
        for run in runs {
            match run.await {
                Ok(outcome) => log::info!("sync run finished during shutdown: {:?}", outcome),
                Err(err) => log::error!("sync run failed during shutdown: {}", err),
            }
        }
        log::info!("🛑 periodic sync stopped");
    }
}
