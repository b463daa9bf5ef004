//! Property tests for the menu projections over arbitrary trees.

use proptest::prelude::*;
use qc_navigation::{build_path_items, filter_menu, filter_paths, MenuNode, MenuTree, PathIndex};
use shared_types::PermissionSet;

#[derive(Debug, Clone)]
enum Shape {
    Leaf(Option<u32>),
    Branch(Option<u32>, Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = proptest::option::of(0u32..8).prop_map(Shape::Leaf);
    leaf.prop_recursive(3, 32, 4, |inner| {
        (
            proptest::option::of(0u32..8),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(id, children)| Shape::Branch(id, children))
    })
}

fn build(shapes: &[Shape], prefix: &str) -> Vec<MenuNode> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let key = format!("{prefix}/n{i}");
            let (node, id) = match shape {
                Shape::Leaf(id) => (MenuNode::leaf(&key, key.clone(), "Page"), id),
                Shape::Branch(id, children) => {
                    (MenuNode::branch(&key, key.clone(), build(children, &key)), id)
                }
            };
            match id {
                Some(id) => node.with_id(*id),
                None => node,
            }
        })
        .collect()
}

fn menu() -> impl Strategy<Value = Vec<MenuNode>> {
    prop::collection::vec(shape(), 0..5).prop_map(|shapes| {
        let mut nodes = vec![MenuNode::leaf("/index", "首页", "Index")];
        nodes.extend(build(&shapes, ""));
        nodes
    })
}

fn permissions() -> impl Strategy<Value = PermissionSet> {
    prop::collection::btree_set(0u32..8, 0..8).prop_map(|ids| ids.into_iter().collect())
}

fn leaf_keys(nodes: &[MenuNode], out: &mut Vec<String>) {
    for node in nodes {
        match node.children() {
            Some(children) => leaf_keys(children, out),
            None => out.push(node.key().to_string()),
        }
    }
}

fn count_nodes(nodes: &[MenuNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + node.children().map(count_nodes).unwrap_or(0))
        .sum()
}

proptest! {
    #[test]
    fn generated_trees_are_valid(nodes in menu()) {
        prop_assert!(MenuTree::new(nodes).is_ok());
    }

    #[test]
    fn paths_match_leaves_of_filtered_menu(nodes in menu(), perms in permissions()) {
        let mut from_menu = Vec::new();
        leaf_keys(&filter_menu(&nodes, &perms), &mut from_menu);
        prop_assert_eq!(filter_paths(&nodes, &perms), from_menu);
    }

    #[test]
    fn filtering_is_idempotent(nodes in menu(), perms in permissions()) {
        let once = filter_menu(&nodes, &perms);
        let twice = filter_menu(&once, &perms);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn index_route_always_present(nodes in menu(), perms in permissions()) {
        let filtered = filter_menu(&nodes, &perms);
        prop_assert!(filtered.iter().any(|node| node.key() == "/index"));
        prop_assert!(filter_paths(&nodes, &perms).contains(&"/index".to_string()));
    }

    #[test]
    fn filtered_menu_never_grows(nodes in menu(), perms in permissions()) {
        prop_assert!(count_nodes(&filter_menu(&nodes, &perms)) <= count_nodes(&nodes));
    }

    #[test]
    fn path_index_covers_every_configured_route(nodes in menu(), perms in permissions()) {
        let index = PathIndex::new(&build_path_items(&nodes));
        prop_assert_eq!(index.len(), count_nodes(&nodes));

        // Whatever is visible can be labelled and resolved.
        for path in filter_paths(&nodes, &perms) {
            prop_assert_eq!(index.resolve(&path), Some(path.as_str()));
            let trail = index.breadcrumbs(&path);
            prop_assert_eq!(trail.last().map(|crumb| crumb.key.as_str()), Some(path.as_str()));
        }
    }

    #[test]
    fn visible_labels_and_trails_match_full_projection(nodes in menu(), a in permissions(), b in permissions()) {
        let full = PathIndex::new(&build_path_items(&nodes));
        for perms in [&a, &b] {
            let visible = PathIndex::new(&build_path_items(&filter_menu(&nodes, perms)));
            for path in filter_paths(&nodes, perms) {
                prop_assert_eq!(visible.label(&path), full.label(&path));
                prop_assert_eq!(visible.breadcrumbs(&path), full.breadcrumbs(&path));
            }
        }
    }
}
