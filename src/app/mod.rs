mod wiring;

use crate::render::{LogRenderer, Renderer, StdoutRenderer};
use crate::{cli, context, core, rest};
use anyhow::{Context as AnyhowContext, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
    pub manager: Arc<core::QuoteManager>,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.log_file.as_deref());
        log::info!("🚀 Starting quotesync");
        log::info!("🔗 Remote source: {}", ctx.remote_url);
        log::info!("📂 Data dir: {}", ctx.data_dir.to_string_lossy());

        wiring::init_data_dir(&ctx).context("initializing data dir")?;
        let store = wiring::init_store(&ctx)?;
        let source = wiring::build_source(&ctx)?;
        let renderer: Arc<dyn Renderer> = if cli.cmd.is_some() {
            Arc::new(StdoutRenderer)
        } else {
            Arc::new(LogRenderer)
        };
        let manager = Arc::new(wiring::build_manager(store, source, renderer));

        Ok((Self { ctx, manager }, cli))
    }
}

pub async fn run_daemon(app: App) -> Result<()> {
    log::info!("🌐 REST API: http://{}", app.ctx.api_listen);
    log::info!("⏱️ Sync interval: {}s", app.ctx.sync_interval.as_secs());
    if let Some(path) = app.ctx.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.to_string_lossy());
    }

    app.manager.start();

    let shutdown = CancellationToken::new();

    // REST
    let api_addr = app.ctx.api_listen;
    let rest_manager = app.manager.clone();
    let rest_shutdown = shutdown.clone();
    let mut rest_handle: JoinHandle<()> = tokio::spawn(async move {
        if let Err(e) = rest::serve(api_addr, rest_manager, rest_shutdown).await {
            log::error!("REST server error: {:#}", e);
        }
    });

    // Periodic sync, armed once
    let sync = app.manager.sync();
    let mut sync_handle = tokio::spawn(sync.run_periodic(app.ctx.sync_interval, shutdown.clone()));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("🧨 Ctrl-C received, shutting down");
        }
        _ = &mut rest_handle => log::error!("REST task exited unexpectedly"),
        _ = &mut sync_handle => log::error!("Sync task exited unexpectedly"),
    }

    shutdown.cancel();

    let mut fatal_error: Option<anyhow::Error> = None;
    if !rest_handle.is_finished() {
        if let Err(e) = rest_handle.await {
            log::error!("REST server error: {}", e);
            fatal_error = Some(e.into());
        }
    }
    if !sync_handle.is_finished() {
        if let Err(e) = sync_handle.await {
            log::error!("Sync task error: {}", e);
            fatal_error.get_or_insert(e.into());
        }
    }

    if let Some(e) = fatal_error {
        return Err(e);
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        // one-shot command mode
        app.manager.load();
        return cmd.run(&app.manager).await;
    }

    run_daemon(app).await
}
