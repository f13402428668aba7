//! Terminal front-end for the `msel` searchable multi-select dropdown.
//!
//! The widget state lives in [`msel_core`]; this crate draws it with ratatui,
//! feeds it crossterm input and provides the binary's ambient pieces
//! (directories, logging, catalog sources).

pub mod app_dirs;
pub mod logging;
pub mod sources;
pub mod ui;

pub use msel_core as core;
pub use ui::{App, AppConfig, SelectionOutcome, Theme};
