use anyhow::{Context, Result};

use crate::cli::Command;
use crate::core::QuoteManager;
use crate::remote::SyncOutcome;

impl Command {
    /// Run a one-shot command against an already started manager.
    pub async fn run(&self, manager: &QuoteManager) -> Result<()> {
        match self {
            Command::Show => {
                manager.next_quote();
                Ok(())
            }
            Command::Add { text, category } => {
                let quote = manager
                    .submit_quote(text, category)
                    .context("adding quote")?;
                println!("{}", quote);
                Ok(())
            }
            Command::Categories => {
                let (selected, options) = manager.categories();
                for option in options {
                    let marker = if option == selected.as_str() { "*" } else { " " };
                    println!("{} {}", marker, option);
                }
                Ok(())
            }
            Command::Filter { category } => {
                manager
                    .change_filter(category)
                    .context("changing category filter")?;
                Ok(())
            }
            Command::Export { out } => {
                let json = manager.export_json().context("exporting quotes")?;
                if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
                std::fs::write(out, json)
                    .with_context(|| format!("writing {}", out.display()))?;
                log::info!("📤 exported quotes to {}", out.display());
                Ok(())
            }
            Command::Import { path } => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let count = manager
                    .import_json(&raw)
                    .with_context(|| format!("importing {}", path.display()))?;
                println!("imported {} quotes", count);
                Ok(())
            }
            Command::Sync => {
                match manager.sync_now().await {
                    SyncOutcome::Added(count) => println!("added {} quotes", count),
                    SyncOutcome::NoChange => println!("no new quotes"),
                    SyncOutcome::Skipped => println!("sync already running"),
                }
                Ok(())
            }
            Command::Push => {
                if !manager.push_now().await {
                    anyhow::bail!("push to remote failed");
                }
                Ok(())
            }
        }
    }
}
