//! # Menu Configuration
//!
//! Loading a menu from JSON, and the built-in console menu.
//!
//! The JSON document is an array of nodes:
//!
//! ```json
//! [
//!   { "key": "/index", "label": "首页", "icon": "pie-chart", "element": "Index" },
//!   { "key": "/user", "label": "用户管理", "children": [
//!       { "id": 1, "key": "/user/account", "label": "账户管理", "element": "Account" }
//!   ] }
//! ]
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Label, MenuError, MenuNode, MenuTree};

impl MenuTree {
    /// Parse and validate a JSON menu document.
    pub fn from_json_str(json: &str) -> Result<Self, MenuError> {
        let nodes: Vec<MenuNode> =
            serde_json::from_str(json).map_err(|e| MenuError::Parse(e.to_string()))?;
        let tree = Self::new(nodes)?;
        debug!(
            top_level = tree.nodes().len(),
            leaves = tree.leaf_count(),
            "Parsed menu configuration"
        );
        Ok(tree)
    }

    /// Read, parse and validate a JSON menu file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_json_str(&json)?;
        info!(path = %path.display(), leaves = tree.leaf_count(), "Loaded menu configuration");
        Ok(tree)
    }

    /// The stock console menu.
    pub fn console_default() -> Self {
        Self::from_trusted(console_menu())
    }

    /// Serialize back to the JSON configuration format.
    pub fn to_json_string(&self) -> Result<String, MenuError> {
        serde_json::to_string_pretty(self.nodes()).map_err(|e| MenuError::Parse(e.to_string()))
    }
}

/// Nodes of the stock console menu.
///
/// Pages are gated by permission ids 1 through 7; the landing page is not.
pub fn console_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("/index", Label::link("/index", "首页"), "Index").with_icon("pie-chart"),
        MenuNode::branch(
            "/user",
            "用户管理",
            vec![
                MenuNode::leaf("/user/account", Label::link("/user/account", "账户管理"), "Account")
                    .with_id(1)
                    .with_icon("user"),
                MenuNode::leaf(
                    "/user/organization",
                    Label::link("/user/organization", "组织结构"),
                    "Organization",
                )
                .with_id(2)
                .with_icon("apartment"),
            ],
        )
        .with_icon("team"),
        MenuNode::branch(
            "/system",
            "系统管理",
            vec![
                MenuNode::leaf("/system/role", Label::link("/system/role", "角色管理"), "Role")
                    .with_id(3)
                    .with_icon("audit"),
                MenuNode::leaf(
                    "/system/permission",
                    Label::link("/system/permission", "权限管理"),
                    "Permission",
                )
                .with_id(4)
                .with_icon("cluster"),
                MenuNode::leaf("/system/setting", Label::link("/system/setting", "系统设置"), "Setting")
                    .with_id(5)
                    .with_icon("setting"),
            ],
        )
        .with_icon("desktop"),
        MenuNode::leaf("/data", Label::link("/data", "数据管理"), "Data")
            .with_id(6)
            .with_icon("bars"),
        MenuNode::leaf("/profile", Label::link("/profile", "个人中心"), "Profile")
            .with_id(7)
            .with_icon("user"),
    ]
}
