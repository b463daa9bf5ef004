//! # Path Items
//!
//! Permission-independent key/label projection of the tree.

use crate::domain::{Label, MenuNode, PathItem};

/// Build a [`PathItem`] for every node, preserving the tree shape.
///
/// A branch's `redirect` is the key of its first direct child that is a
/// leaf, so landing on a branch key has somewhere to go. A branch whose
/// children are all branches gets no redirect.
pub fn build_path_items(nodes: &[MenuNode]) -> Vec<PathItem> {
    nodes.iter().map(build_path_item).collect()
}

fn build_path_item(node: &MenuNode) -> PathItem {
    let mut item = PathItem {
        key: node.key().to_string(),
        label: extract_label_text(node.label()),
        redirect: None,
        children: None,
    };

    if let Some(children) = node.children() {
        item.redirect = children
            .iter()
            .find(|child| child.is_leaf())
            .map(|child| child.key().to_string());
        item.children = Some(build_path_items(children));
    }

    item
}

/// Plain text of a label. Icons and other non-text fragments are dropped.
pub fn extract_label_text(label: &Label) -> String {
    match label {
        Label::Text(text) => text.clone(),
        Label::Element(element) => element.text(),
    }
}
