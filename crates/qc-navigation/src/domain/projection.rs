//! # Derived Projections
//!
//! Values computed from a menu tree on demand. None of them is stored.

use serde::{Deserialize, Serialize};

use super::menu::PageRef;

/// Text-only view of a menu node, used for route lookup and breadcrumbs.
///
/// Built without regard to permissions: every configured route has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathItem {
    /// Same key as the source node
    pub key: String,
    /// Plain label text
    pub label: String,
    /// For branches: the first direct child that is a leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// For branches: child items, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PathItem>>,
}

/// A visible page and the path it is mounted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route path (the leaf's key)
    pub path: String,
    /// Page to mount
    pub page: PageRef,
}
