//! # Permissions
//!
//! A session is granted a set of integer permission ids. Menu entries that
//! are gated carry one of these ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a single grantable permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(pub u32);

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PermissionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// The permission ids granted to the current session.
///
/// Serializes as a plain JSON array of integers, which is also the shape the
/// backend returns on login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<PermissionId>);

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership. `None` (an ungated entry) is never a member.
    pub fn contains(&self, id: Option<PermissionId>) -> bool {
        id.is_some_and(|id| self.0.contains(&id))
    }

    /// Grant a permission. Returns false if it was already granted.
    pub fn insert(&mut self, id: PermissionId) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Granted ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PermissionId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<PermissionId> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<u32> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().map(PermissionId).collect())
    }
}

impl<const N: usize> From<[u32; N]> for PermissionSet {
    fn from(ids: [u32; N]) -> Self {
        ids.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_ungated_entries() {
        let perms = PermissionSet::from([1, 2]);
        assert!(perms.contains(Some(PermissionId(1))));
        assert!(!perms.contains(Some(PermissionId(3))));
        assert!(!perms.contains(None));
    }

    #[test]
    fn test_serializes_as_integer_array() {
        let perms = PermissionSet::from([7, 3]);
        let json = serde_json::to_string(&perms).unwrap();
        assert_eq!(json, "[3,7]");

        let back: PermissionSet = serde_json::from_str("[1,1,2]").unwrap();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut perms = PermissionSet::new();
        assert!(perms.insert(PermissionId(4)));
        assert!(!perms.insert(PermissionId(4)));
        assert_eq!(perms.iter().collect::<Vec<_>>(), vec![PermissionId(4)]);
    }
}
