//! Local quote collection with category filtering, random display, and an
//! additive merge against a remote quote source.
//!
//! The binary wires [`core::QuoteManager`] to a SQLite-backed persistent
//! store, an in-memory session store and an HTTP source, then either runs a
//! one-shot CLI command or the daemon (REST API plus periodic sync).

pub mod app;
pub mod cli;
mod commands;
pub mod context;
pub mod core;
pub mod notifier;
pub mod remote;
pub mod render;
pub mod repository;
pub mod rest;
pub mod selector;
pub mod storage;
pub mod tracing;
pub mod types;

#[cfg(test)]
mod testing;
