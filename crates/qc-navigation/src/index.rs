//! # Path Index
//!
//! Flat lookup over [`PathItem`]s: label by key, default redirects and
//! breadcrumbs. Built from the permission-independent projection, so it
//! answers for every configured route.

use std::collections::HashMap;

use crate::domain::PathItem;

/// What the index knows about one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Plain label
    pub label: String,
    /// Default destination when landing on this key
    pub redirect: Option<String>,
    /// Key of the enclosing item, `None` at top level
    pub parent: Option<String>,
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Route key
    pub key: String,
    /// Plain label
    pub label: String,
}

/// Key → entry table with parent links.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    entries: HashMap<String, PathEntry>,
}

impl PathIndex {
    /// Index a path item forest.
    pub fn new(items: &[PathItem]) -> Self {
        let mut index = Self::default();
        index.insert_all(items, None);
        index
    }

    fn insert_all(&mut self, items: &[PathItem], parent: Option<&str>) {
        for item in items {
            self.entries.insert(
                item.key.clone(),
                PathEntry {
                    label: item.label.clone(),
                    redirect: item.redirect.clone(),
                    parent: parent.map(str::to_string),
                },
            );
            if let Some(children) = &item.children {
                self.insert_all(children, Some(&item.key));
            }
        }
    }

    /// Entry for `key`.
    pub fn get(&self, key: &str) -> Option<&PathEntry> {
        self.entries.get(key)
    }

    /// Label for `key`.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.label.as_str())
    }

    /// Follow redirects from `key` to the route that should actually render.
    ///
    /// Returns `None` for unknown keys. Stops at the first key without a
    /// redirect, or at a redirect pointing outside the index. A redirect
    /// chain longer than the index is a cycle and resolves to `None`.
    pub fn resolve<'a>(&'a self, key: &'a str) -> Option<&'a str> {
        let mut current = key;
        let mut entry = self.entries.get(current)?;

        for _ in 0..=self.entries.len() {
            let Some(next) = entry.redirect.as_deref() else {
                return Some(current);
            };
            match self.entries.get(next) {
                Some(next_entry) => {
                    current = next;
                    entry = next_entry;
                }
                None => return Some(next),
            }
        }

        None
    }

    /// Trail from the top-level item down to `key`, inclusive.
    ///
    /// Empty for unknown keys.
    pub fn breadcrumbs(&self, key: &str) -> Vec<Breadcrumb> {
        let mut trail = Vec::new();
        let mut current = Some(key);

        while let Some(current_key) = current {
            let Some(entry) = self.entries.get(current_key) else {
                break;
            };
            if trail.len() > self.entries.len() {
                break;
            }
            trail.push(Breadcrumb {
                key: current_key.to_string(),
                label: entry.label.clone(),
            });
            current = entry.parent.as_deref();
        }

        trail.reverse();
        trail
    }

    /// Number of indexed routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
