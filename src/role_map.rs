//! Translation of gold-ontology roles into the response vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Partial mapping from gold role labels to response role labels.
///
/// `None` means the gold role has no counterpart, which makes every
/// role-gated check fail for that mention.
pub trait RoleMap: Sync {
    fn map_role<'a>(&'a self, gold_role: &'a str) -> Option<&'a str>;
}

/// Maps every role to itself. For corpora already in the response vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRoles;

impl RoleMap for IdentityRoles {
    fn map_role<'a>(&'a self, gold_role: &'a str) -> Option<&'a str> {
        Some(gold_role)
    }
}

/// Explicit table of role translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleTable {
    entries: BTreeMap<String, String>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, gold_role: impl Into<String>, response_role: impl Into<String>) {
        self.entries.insert(gold_role.into(), response_role.into());
    }

    pub fn with(mut self, gold_role: impl Into<String>, response_role: impl Into<String>) -> Self {
        self.insert(gold_role, response_role);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RoleMap for RoleTable {
    fn map_role<'a>(&'a self, gold_role: &'a str) -> Option<&'a str> {
        self.entries.get(gold_role).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RoleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
