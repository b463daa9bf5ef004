//! # QC Navigation
//!
//! Permission-filtered projection of the console's navigation tree.
//!
//! **Architecture:** Hexagonal (pure domain + algorithms, no I/O outside `config`)
//!
//! ## Purpose
//!
//! The console's menu is a static, hand-authored tree. Each render derives:
//! - the subset of the tree visible under the session's permissions
//! - the flat list of navigable paths (and the pages mounted on them)
//! - a permission-independent key/label projection with default redirects,
//!   used for route lookup and breadcrumbs
//! - the keys of the branches to expand for the active route
//!
//! Nothing is cached. Every call reads the `PermissionSet` it is handed.
//!
//! ## Module Structure
//!
//! ```text
//! qc-navigation/
//! ├── domain/          # MenuNode, Label, MenuTree, PathItem, errors
//! ├── algorithms/      # filtering, path items, parent-key search
//! ├── index.rs         # PathIndex: label lookup, redirects, breadcrumbs
//! └── config.rs        # JSON loading + the built-in console menu
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qc_navigation::MenuTree;
//! use shared_types::PermissionSet;
//!
//! let tree = MenuTree::console_default();
//! let perms = PermissionSet::from([1, 3]);
//!
//! let menu = tree.filter_menu(&perms);
//! let paths = tree.filter_paths(&perms);
//! let index = tree.path_index();
//! assert_eq!(index.resolve("/user"), Some("/user/account"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod config;
pub mod domain;
pub mod index;

// Re-exports
pub use algorithms::{
    build_path_items, extract_label_text, filter_menu, filter_paths, filter_routes,
    find_top_level_parent_keys, is_visible,
};
pub use domain::{
    IconRef, Label, LabelElement, LabelFragment, MenuBranch, MenuError, MenuLeaf, MenuNode,
    MenuTree, PageRef, PathItem, RouteEntry,
};
pub use index::{Breadcrumb, PathEntry, PathIndex};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
