//! QC-Console: Quantum-Chain Operator Console
//!
//! A TUI console that shows only the pages the signed-in operator may open.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  QC-CONSOLE                                                     │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  MENU                  │  BREADCRUMBS                           │
//! │  (filter_menu)         │  ACTIVE PAGE (filter_routes)           │
//! ├────────────────────────┤                                        │
//! │  SESSION               │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! ```
//!
//! The menu is projected by `qc-navigation` from the permissions held in
//! the `qc-session` store. Every backend call goes through the session
//! interceptor; its notifications and forced navigation are queued and
//! applied to the [`App`] by the UI loop.

pub mod config;
pub mod domain;
pub mod logging;
pub mod session;
pub mod ui;

pub use config::{ConsoleConfig, ConsoleConfigError};
pub use domain::{App, AppState, MenuRow, RowKind};
pub use session::ConsoleSession;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
