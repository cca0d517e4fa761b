use std::fmt;

use serde::Serialize;

use crate::types::{CategoryFilter, NO_QUOTES_MESSAGE};

/// What the display shows after a pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "line", rename_all = "camelCase")]
pub enum View {
    Quote(String),
    Empty,
}

impl View {
    pub fn line(&self) -> &str {
        match self {
            View::Quote(line) => line,
            View::Empty => NO_QUOTES_MESSAGE,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.line())
    }
}

/// Presentation sink. Core code hands it values and never formats output
/// itself.
pub trait Renderer: Send + Sync {
    fn show(&self, view: &View);
    fn categories(&self, options: &[String], selected: &CategoryFilter);
}

/// Daemon renderer: the "display" is the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn show(&self, view: &View) {
        log::info!("💬 {}", view);
    }

    fn categories(&self, options: &[String], selected: &CategoryFilter) {
        log::debug!("🗂️ categories [{}] selected={}", options.join(", "), selected);
    }
}

/// One-shot command renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn show(&self, view: &View) {
        println!("{}", view);
    }

    fn categories(&self, options: &[String], selected: &CategoryFilter) {
        log::debug!("categories [{}] selected={}", options.join(", "), selected);
    }
}
