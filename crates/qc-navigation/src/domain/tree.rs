//! # Menu Tree
//!
//! Owner of a validated navigation configuration.

use shared_types::PermissionSet;
use std::collections::HashSet;

use super::errors::MenuError;
use super::menu::MenuNode;
use super::projection::{PathItem, RouteEntry};
use crate::algorithms;
use crate::index::PathIndex;

/// A navigation tree whose keys are known to be unique and non-empty.
///
/// The tree never changes after construction; every view is derived on call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    /// Validate and wrap top-level nodes.
    pub fn new(nodes: Vec<MenuNode>) -> Result<Self, MenuError> {
        let mut seen = HashSet::new();
        check_keys(&nodes, &mut seen)?;
        Ok(Self { nodes })
    }

    /// Wrap nodes already known to be valid.
    pub(crate) fn from_trusted(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in configuration order.
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Find a node anywhere in the tree.
    pub fn find(&self, key: &str) -> Option<&MenuNode> {
        find_in(&self.nodes, key)
    }

    /// Number of navigable leaves.
    pub fn leaf_count(&self) -> usize {
        count_leaves(&self.nodes)
    }

    /// See [`algorithms::filter_menu`].
    pub fn filter_menu(&self, permissions: &PermissionSet) -> Vec<MenuNode> {
        algorithms::filter_menu(&self.nodes, permissions)
    }

    /// See [`algorithms::filter_paths`].
    pub fn filter_paths(&self, permissions: &PermissionSet) -> Vec<String> {
        algorithms::filter_paths(&self.nodes, permissions)
    }

    /// See [`algorithms::filter_routes`].
    pub fn filter_routes(&self, permissions: &PermissionSet) -> Vec<RouteEntry> {
        algorithms::filter_routes(&self.nodes, permissions)
    }

    /// See [`algorithms::build_path_items`].
    pub fn path_items(&self) -> Vec<PathItem> {
        algorithms::build_path_items(&self.nodes)
    }

    /// Lookup table over [`Self::path_items`].
    pub fn path_index(&self) -> PathIndex {
        PathIndex::new(&self.path_items())
    }

    /// See [`algorithms::find_top_level_parent_keys`].
    pub fn top_level_parent_keys(&self, route: &str) -> Vec<String> {
        algorithms::find_top_level_parent_keys(&self.nodes, route)
    }
}

fn check_keys<'a>(nodes: &'a [MenuNode], seen: &mut HashSet<&'a str>) -> Result<(), MenuError> {
    for node in nodes {
        let key = node.key();
        if key.is_empty() {
            return Err(MenuError::EmptyKey(algorithms::extract_label_text(node.label())));
        }
        if !seen.insert(key) {
            return Err(MenuError::DuplicateKey(key.to_string()));
        }
        if let Some(children) = node.children() {
            check_keys(children, seen)?;
        }
    }
    Ok(())
}

fn find_in<'a>(nodes: &'a [MenuNode], key: &str) -> Option<&'a MenuNode> {
    nodes.iter().find_map(|node| {
        if node.key() == key {
            Some(node)
        } else {
            node.children().and_then(|children| find_in(children, key))
        }
    })
}

fn count_leaves(nodes: &[MenuNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node.children() {
            Some(children) => count_leaves(children),
            None => 1,
        })
        .sum()
}
