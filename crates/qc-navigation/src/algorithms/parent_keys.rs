//! # Parent Key Search
//!
//! Which branches to expand so the active route is visible in the menu.

use crate::domain::MenuNode;

/// Keys of the branches whose direct children include `route`.
///
/// Walks each level in order. Meeting `route` itself ends the walk of that
/// level (later siblings at that level are not visited); the enclosing level
/// carries on. After descending into a branch, its key is appended only if
/// one of its *direct* children is `route`, so the innermost match comes
/// first and a branch two or more levels above `route` is not reported.
///
/// The console menu is two levels deep, where this is exactly the parent of
/// the active page. Callers needing the full ancestor chain of deeper trees
/// should use [`crate::PathIndex::breadcrumbs`].
pub fn find_top_level_parent_keys(nodes: &[MenuNode], route: &str) -> Vec<String> {
    let mut parent_keys = Vec::new();
    collect_parent_keys(nodes, route, &mut parent_keys);
    parent_keys
}

fn collect_parent_keys(nodes: &[MenuNode], route: &str, parent_keys: &mut Vec<String>) {
    for node in nodes {
        if node.key() == route {
            return;
        }
        if let Some(children) = node.children() {
            collect_parent_keys(children, route, parent_keys);
            if children.iter().any(|child| child.key() == route) {
                parent_keys.push(node.key().to_string());
            }
        }
    }
}
