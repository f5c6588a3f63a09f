//! nudge - a terminal UI for triaging stale conversations and drafting replies
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod toast;
pub mod traits;
pub mod ui;
