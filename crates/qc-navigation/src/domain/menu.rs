//! # Menu Nodes
//!
//! A node is either a navigable leaf that mounts a page, or a grouping branch.
//! The configuration format is a flat record (optional `element` /
//! `children` fields) and is converted into the tagged form on load, so the
//! rest of the crate never has to check which optional field is populated.

use serde::{Deserialize, Serialize};
use shared_types::PermissionId;
use std::fmt;

use super::errors::MenuError;

/// Opaque reference to an icon. Resolved by whatever renders the menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    /// Create an icon reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Icon name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque reference to the page mounted on a leaf route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRef(pub String);

impl PageRef {
    /// Create a page reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Page name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display label of a menu node.
///
/// Plain text is preferred. `Element` covers labels rendered as a link
/// wrapping the text, optionally alongside an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Literal display text.
    Text(String),
    /// Rendered fragment tree.
    Element(LabelElement),
}

impl Label {
    /// Plain-text label.
    pub fn text(text: impl Into<String>) -> Self {
        Label::Text(text.into())
    }

    /// Label rendered as a link to `to` with `text` as its only child.
    pub fn link(to: impl Into<String>, text: impl Into<String>) -> Self {
        Label::Element(LabelElement {
            link: Some(to.into()),
            children: vec![LabelFragment::Text(text.into())],
        })
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

/// A rendered label: an optional link target and its ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelElement {
    /// Route the label links to, if it is a link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Rendered children in order.
    #[serde(default)]
    pub children: Vec<LabelFragment>,
}

impl LabelElement {
    /// Concatenated text of every text fragment, depth-first. Icons are skipped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                LabelFragment::Text(text) => out.push_str(text),
                LabelFragment::Element(element) => element.push_text(out),
                LabelFragment::Icon { .. } => {}
            }
        }
    }
}

/// One child of a rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelFragment {
    /// Text content.
    Text(String),
    /// Decorative icon.
    Icon {
        /// Icon to render
        icon: IconRef,
    },
    /// Nested element.
    Element(LabelElement),
}

/// Grouping node. Never mounts a page itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBranch {
    /// Route key, unique across the tree
    pub key: String,
    /// Display label
    pub label: Label,
    /// Optional icon
    pub icon: Option<IconRef>,
    /// Permission gating the branch when none of its children are visible
    pub id: Option<PermissionId>,
    /// Ordered children
    pub children: Vec<MenuNode>,
}

impl MenuBranch {
    /// Copy of this branch carrying `children` instead of its own.
    pub fn with_children(&self, children: Vec<MenuNode>) -> MenuBranch {
        MenuBranch {
            key: self.key.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            id: self.id,
            children,
        }
    }
}

/// Navigable node mounting a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLeaf {
    /// Route key, unique across the tree
    pub key: String,
    /// Display label
    pub label: Label,
    /// Optional icon
    pub icon: Option<IconRef>,
    /// Permission required to see the page
    pub id: Option<PermissionId>,
    /// Page mounted on this route
    pub page: PageRef,
}

/// A node of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMenuNode", into = "RawMenuNode")]
pub enum MenuNode {
    /// Grouping node
    Branch(MenuBranch),
    /// Navigable node
    Leaf(MenuLeaf),
}

impl MenuNode {
    /// Create a leaf mounting `page` on `key`.
    pub fn leaf(key: impl Into<String>, label: impl Into<Label>, page: impl Into<String>) -> Self {
        MenuNode::Leaf(MenuLeaf {
            key: key.into(),
            label: label.into(),
            icon: None,
            id: None,
            page: PageRef::new(page),
        })
    }

    /// Create a branch grouping `children` under `key`.
    pub fn branch(key: impl Into<String>, label: impl Into<Label>, children: Vec<MenuNode>) -> Self {
        MenuNode::Branch(MenuBranch {
            key: key.into(),
            label: label.into(),
            icon: None,
            id: None,
            children,
        })
    }

    /// Gate this node behind a permission.
    pub fn with_id(mut self, id: u32) -> Self {
        match &mut self {
            MenuNode::Branch(branch) => branch.id = Some(PermissionId(id)),
            MenuNode::Leaf(leaf) => leaf.id = Some(PermissionId(id)),
        }
        self
    }

    /// Attach an icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = Some(IconRef::new(icon));
        match &mut self {
            MenuNode::Branch(branch) => branch.icon = icon,
            MenuNode::Leaf(leaf) => leaf.icon = icon,
        }
        self
    }

    /// Route key.
    pub fn key(&self) -> &str {
        match self {
            MenuNode::Branch(branch) => &branch.key,
            MenuNode::Leaf(leaf) => &leaf.key,
        }
    }

    /// Display label.
    pub fn label(&self) -> &Label {
        match self {
            MenuNode::Branch(branch) => &branch.label,
            MenuNode::Leaf(leaf) => &leaf.label,
        }
    }

    /// Icon, if any.
    pub fn icon(&self) -> Option<&IconRef> {
        match self {
            MenuNode::Branch(branch) => branch.icon.as_ref(),
            MenuNode::Leaf(leaf) => leaf.icon.as_ref(),
        }
    }

    /// Gating permission, if any.
    pub fn id(&self) -> Option<PermissionId> {
        match self {
            MenuNode::Branch(branch) => branch.id,
            MenuNode::Leaf(leaf) => leaf.id,
        }
    }

    /// Children of a branch. `None` for leaves.
    pub fn children(&self) -> Option<&[MenuNode]> {
        match self {
            MenuNode::Branch(branch) => Some(&branch.children),
            MenuNode::Leaf(_) => None,
        }
    }

    /// Page of a leaf. `None` for branches.
    pub fn page(&self) -> Option<&PageRef> {
        match self {
            MenuNode::Branch(_) => None,
            MenuNode::Leaf(leaf) => Some(&leaf.page),
        }
    }

    /// Whether this node is a navigable leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, MenuNode::Leaf(_))
    }
}

/// Configuration shape of a node: which kind it is follows from whether
/// `element` or `children` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawMenuNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<PermissionId>,
    key: String,
    label: Label,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<IconRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    element: Option<PageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<MenuNode>>,
}

impl TryFrom<RawMenuNode> for MenuNode {
    type Error = MenuError;

    fn try_from(raw: RawMenuNode) -> Result<Self, Self::Error> {
        if raw.key.is_empty() {
            let label = match &raw.label {
                Label::Text(text) => text.clone(),
                Label::Element(element) => element.text(),
            };
            return Err(MenuError::EmptyKey(label));
        }

        match (raw.element, raw.children) {
            (Some(_), Some(_)) => Err(MenuError::AmbiguousNode(raw.key)),
            (None, None) => Err(MenuError::EmptyNode(raw.key)),
            (Some(page), None) => Ok(MenuNode::Leaf(MenuLeaf {
                key: raw.key,
                label: raw.label,
                icon: raw.icon,
                id: raw.id,
                page,
            })),
            (None, Some(children)) => Ok(MenuNode::Branch(MenuBranch {
                key: raw.key,
                label: raw.label,
                icon: raw.icon,
                id: raw.id,
                children,
            })),
        }
    }
}

impl From<MenuNode> for RawMenuNode {
    fn from(node: MenuNode) -> Self {
        match node {
            MenuNode::Branch(branch) => RawMenuNode {
                id: branch.id,
                key: branch.key,
                label: branch.label,
                icon: branch.icon,
                element: None,
                children: Some(branch.children),
            },
            MenuNode::Leaf(leaf) => RawMenuNode {
                id: leaf.id,
                key: leaf.key,
                label: leaf.label,
                icon: leaf.icon,
                element: Some(leaf.page),
                children: None,
            },
        }
    }
}
