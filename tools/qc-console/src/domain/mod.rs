//! Domain models for the console.

mod app;

pub use app::{App, AppState, MenuRow, RowKind};
