//! # Algorithms Module
//!
//! Pure projections over a menu tree. No function here fails or caches.

pub mod filter;
pub mod parent_keys;
pub mod path_items;

pub use filter::{filter_menu, filter_paths, filter_routes, is_visible};
pub use parent_keys::find_top_level_parent_keys;
pub use path_items::{build_path_items, extract_label_text};
