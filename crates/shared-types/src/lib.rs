//! # Shared Types Crate
//!
//! Types shared by the console cores.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the permission model and the well-known
//!   routes are defined once, here.
//! - **Explicit Context**: permissions are plain values handed to whoever
//!   needs them. Nothing in this crate reads ambient state.

pub mod permissions;
pub mod routes;

pub use permissions::{PermissionId, PermissionSet};
pub use routes::{is_index_route, INDEX_ROUTE, ROOT_ROUTE};
