//! # Permission Filtering
//!
//! A leaf is visible when its permission id is granted, or when it is the
//! landing route. A branch is visible when any child is visible; failing
//! that, it falls back to the leaf test on its own id.

use shared_types::{is_index_route, PermissionSet};

use crate::domain::{MenuNode, PageRef, RouteEntry};

/// The visibility test applied to a single node, ignoring its children.
pub fn is_visible(node: &MenuNode, permissions: &PermissionSet) -> bool {
    permissions.contains(node.id()) || is_index_route(node.key())
}

/// Subtree visible under `permissions`.
///
/// Branches keep only their visible children, in configuration order. A
/// branch kept on its own id (no visible children) is returned without
/// children. Dropped nodes leave no gap in the output.
pub fn filter_menu(nodes: &[MenuNode], permissions: &PermissionSet) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, permissions))
        .collect()
}

fn filter_node(node: &MenuNode, permissions: &PermissionSet) -> Option<MenuNode> {
    match node {
        MenuNode::Branch(branch) => {
            let children = filter_menu(&branch.children, permissions);
            if !children.is_empty() {
                Some(MenuNode::Branch(branch.with_children(children)))
            } else if is_visible(node, permissions) {
                Some(MenuNode::Branch(branch.with_children(Vec::new())))
            } else {
                None
            }
        }
        MenuNode::Leaf(_) => is_visible(node, permissions).then(|| node.clone()),
    }
}

/// Keys of every visible leaf, depth-first. Branch keys never appear.
pub fn filter_paths(nodes: &[MenuNode], permissions: &PermissionSet) -> Vec<String> {
    let mut paths = Vec::new();
    walk_visible_leaves(nodes, permissions, &mut |key, _| paths.push(key.to_string()));
    paths
}

/// Every visible page with the path it mounts on, depth-first.
pub fn filter_routes(nodes: &[MenuNode], permissions: &PermissionSet) -> Vec<RouteEntry> {
    let mut routes = Vec::new();
    walk_visible_leaves(nodes, permissions, &mut |key, page| {
        routes.push(RouteEntry {
            path: key.to_string(),
            page: page.clone(),
        })
    });
    routes
}

fn walk_visible_leaves<F>(nodes: &[MenuNode], permissions: &PermissionSet, visit: &mut F)
where
    F: FnMut(&str, &PageRef),
{
    for node in nodes {
        match node {
            MenuNode::Branch(branch) => walk_visible_leaves(&branch.children, permissions, visit),
            MenuNode::Leaf(leaf) => {
                if is_visible(node, permissions) {
                    visit(&leaf.key, &leaf.page);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level() -> Vec<MenuNode> {
        vec![MenuNode::branch(
            "/a",
            "A",
            vec![
                MenuNode::leaf("/a/x", "X", "X").with_id(1),
                MenuNode::leaf("/a/y", "Y", "Y").with_id(2),
            ],
        )]
    }

    #[test]
    fn test_branch_keeps_only_permitted_children() {
        let filtered = filter_menu(&two_level(), &PermissionSet::from([1]));

        let expected = vec![MenuNode::branch(
            "/a",
            "A",
            vec![MenuNode::leaf("/a/x", "X", "X").with_id(1)],
        )];
        assert_eq!(filtered, expected);
        assert_eq!(filter_paths(&two_level(), &PermissionSet::from([1])), vec!["/a/x"]);
    }

    #[test]
    fn test_branch_without_visible_children_dropped() {
        let filtered = filter_menu(&two_level(), &PermissionSet::from([9]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_branch_kept_on_own_id_has_no_children() {
        let nodes = vec![MenuNode::branch(
            "/a",
            "A",
            vec![MenuNode::leaf("/a/x", "X", "X").with_id(1)],
        )
        .with_id(5)];

        let filtered = filter_menu(&nodes, &PermissionSet::from([5]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key(), "/a");
        assert_eq!(filtered[0].children().map(<[MenuNode]>::len), Some(0));
        assert!(filter_paths(&nodes, &PermissionSet::from([5])).is_empty());
    }

    #[test]
    fn test_own_branch_id_ignored_when_children_visible() {
        let nodes = vec![MenuNode::branch(
            "/a",
            "A",
            vec![
                MenuNode::leaf("/a/x", "X", "X").with_id(1),
                MenuNode::leaf("/a/y", "Y", "Y").with_id(2),
            ],
        )
        .with_id(5)];

        let filtered = filter_menu(&nodes, &PermissionSet::from([1, 5]));
        assert_eq!(filtered[0].children().map(<[MenuNode]>::len), Some(1));
    }

    #[test]
    fn test_index_route_visible_without_permissions() {
        let nodes = vec![
            MenuNode::leaf("/index", "首页", "Index"),
            MenuNode::leaf("/data", "数据管理", "Data").with_id(6),
        ];

        let filtered = filter_menu(&nodes, &PermissionSet::new());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key(), "/index");
        assert_eq!(filter_paths(&nodes, &PermissionSet::new()), vec!["/index"]);
    }

    #[test]
    fn test_ungated_leaf_hidden() {
        let nodes = vec![MenuNode::leaf("/open", "Open", "Open")];
        assert!(filter_menu(&nodes, &PermissionSet::from([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let nodes = vec![
            MenuNode::leaf("/c", "C", "C").with_id(3),
            MenuNode::leaf("/a", "A", "A").with_id(1),
            MenuNode::leaf("/b", "B", "B").with_id(2),
        ];
        let perms = PermissionSet::from([1, 2, 3]);
        assert_eq!(filter_paths(&nodes, &perms), vec!["/c", "/a", "/b"]);
    }

    #[test]
    fn test_routes_carry_pages() {
        let routes = filter_routes(&two_level(), &PermissionSet::from([1, 2]));
        let pages: Vec<_> = routes.iter().map(|r| (r.path.as_str(), r.page.as_str())).collect();
        assert_eq!(pages, vec![("/a/x", "X"), ("/a/y", "Y")]);
    }

    #[test]
    fn test_empty_tree() {
        assert!(filter_menu(&[], &PermissionSet::from([1])).is_empty());
        assert!(filter_paths(&[], &PermissionSet::from([1])).is_empty());
    }
}
