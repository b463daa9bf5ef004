//! # Domain Layer
//!
//! Menu configuration types and their derived projections.

pub mod errors;
pub mod menu;
pub mod projection;
pub mod tree;

pub use errors::MenuError;
pub use menu::{IconRef, Label, LabelElement, LabelFragment, MenuBranch, MenuLeaf, MenuNode, PageRef};
pub use projection::{PathItem, RouteEntry};
pub use tree::MenuTree;
