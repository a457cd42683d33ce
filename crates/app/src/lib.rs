//! `stockroom-app`
//!
//! **Responsibility:** the orchestrator and its surfaces.
//!
//! This crate provides:
//! - `AppState`, the single owner of the record store, filter, sort direction
//!   and edit session
//! - Intents flowing up from the table, form and category selector
//! - View models plus a plain-text renderer
//! - A line-oriented shell (native) and a Leptos single-page frontend (wasm32)

pub mod config;
pub mod intent;
pub mod render;
pub mod shell;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::AppConfig;
pub use intent::{FormEvent, Intent, Outcome, TableIntent};
pub use render::{CategoryOptions, FormView, TableRow, TableView};
pub use shell::{Shell, ShellError};
pub use state::AppState;
