//! Path-prefix → sidebar mapping.
//!
//! Prefixes are kept in registration order (which is also serialization
//! order), so two registries built from the same declarations are identical.
//! Lookups pick the longest registered prefix of the visited path.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::SitefigError;
use crate::nav::NavigationTree;
use crate::types::PrefixPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarRegistry {
    entries: Vec<(String, NavigationTree)>,
    policy: PrefixPolicy,
}

impl SidebarRegistry {
    /// A registry that allows nested prefixes ([`PrefixPolicy::Nested`]).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PrefixPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// A registry that rejects overlapping prefixes ([`PrefixPolicy::Disjoint`]).
    pub fn disjoint() -> Self {
        Self::with_policy(PrefixPolicy::Disjoint)
    }

    pub fn policy(&self) -> PrefixPolicy {
        self.policy
    }

    /// Register `tree` for every path under `prefix`.
    ///
    /// Re-registering a prefix is an error, never an overwrite. Under
    /// [`PrefixPolicy::Disjoint`], a prefix that contains or is contained by an
    /// existing one is rejected too.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        tree: NavigationTree,
    ) -> Result<(), SitefigError> {
        let prefix = prefix.into();
        if !prefix.starts_with('/') {
            return Err(SitefigError::invalid(
                format!("sidebar '{prefix}'"),
                "prefix must start with '/'",
            ));
        }

        if let Some((existing, _)) = self
            .entries
            .iter()
            .find(|(existing, _)| self.conflicts(existing, &prefix))
        {
            return Err(SitefigError::ConflictingPrefix {
                prefix,
                existing: existing.clone(),
            });
        }

        tracing::debug!(prefix = %prefix, links = tree.flatten_links().count(), "registered sidebar");
        self.entries.push((prefix, tree));
        Ok(())
    }

    fn conflicts(&self, existing: &str, prefix: &str) -> bool {
        existing == prefix
            || (self.policy == PrefixPolicy::Disjoint
                && (existing.starts_with(prefix) || prefix.starts_with(existing)))
    }

    /// The sidebar for `path`: the tree under the longest registered prefix
    /// of `path`, or `None` when nothing matches.
    ///
    /// If two matching prefixes had equal length, the one registered last
    /// would win. Registration rules make that unreachable.
    pub fn resolve(&self, path: &str) -> Option<&NavigationTree> {
        let mut best: Option<&(String, NavigationTree)> = None;
        for entry in &self.entries {
            if !path.starts_with(entry.0.as_str()) {
                continue;
            }
            match best {
                Some(current) if current.0.len() > entry.0.len() => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(_, tree)| tree)
    }

    /// Exact lookup by prefix.
    pub fn get(&self, prefix: &str) -> Option<&NavigationTree> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, tree)| tree)
    }

    /// `(prefix, tree)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NavigationTree)> {
        self.entries.iter().map(|(p, tree)| (p.as_str(), tree))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SidebarRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, tree) in &self.entries {
            map.serialize_entry(prefix, tree)?;
        }
        map.end()
    }
}
