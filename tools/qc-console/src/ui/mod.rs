//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Main layout orchestration
//! - `left_panel.rs`: Filtered menu + session summary
//! - `right_panel.rs`: Breadcrumbs and the active page
//! - `widgets/`: Reusable UI components

mod layout;
mod left_panel;
mod right_panel;

pub mod widgets;

pub use layout::render;
