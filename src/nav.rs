//! Navigation trees: the top nav bar and every sidebar.
//!
//! A [`NavigationTree`] only grows. Each append is validated against the whole
//! tree before it lands, so a tree can never hold two leaves with the same
//! link or an entry with an empty label. A rejected append leaves the tree
//! exactly as it was.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::SitefigError;
use crate::types::{NavEntry, NavGroup, NavItem};

/// Ordered menu of groups (and, for nav bars, bare top-level links).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    entries: Vec<NavEntry>,
}

impl NavigationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group.
    ///
    /// Fails with [`SitefigError::EmptyLabel`] if the group or anything inside
    /// it has a blank label, and with [`SitefigError::DuplicateLink`] if any
    /// leaf link in the group is already present anywhere in the tree (or
    /// appears twice within the group).
    pub fn add_group(&mut self, group: NavGroup) -> Result<(), SitefigError> {
        self.push(NavEntry::Group(group))
    }

    /// Append a bare top-level link. Same rules as [`add_group`](Self::add_group).
    pub fn add_item(&mut self, item: NavItem) -> Result<(), SitefigError> {
        self.push(NavEntry::Item(item))
    }

    /// Append either kind of entry.
    pub fn add(&mut self, entry: impl Into<NavEntry>) -> Result<(), SitefigError> {
        self.push(entry.into())
    }

    fn push(&mut self, entry: NavEntry) -> Result<(), SitefigError> {
        check_labels(&entry)?;
        {
            let mut seen: HashSet<&str> = self.flatten_links().map(|(_, link)| link).collect();
            for (label, link) in FlattenLinks::new(std::slice::from_ref(&entry)) {
                if !seen.insert(link) {
                    return Err(SitefigError::DuplicateLink {
                        link: link.to_string(),
                        label: label.to_string(),
                    });
                }
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Depth-first `(label, link)` pairs in display order.
    ///
    /// The traversal is lazy; call again (or clone the iterator) to restart.
    pub fn flatten_links(&self) -> FlattenLinks<'_> {
        FlattenLinks::new(&self.entries)
    }

    pub fn contains_link(&self, link: &str) -> bool {
        self.flatten_links().any(|(_, l)| l == link)
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Only the group entries, in order.
    pub fn groups(&self) -> impl Iterator<Item = &NavGroup> {
        self.entries.iter().filter_map(|entry| match entry {
            NavEntry::Group(group) => Some(group),
            NavEntry::Item(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_labels(entry: &NavEntry) -> Result<(), SitefigError> {
    match entry {
        NavEntry::Item(item) => {
            if item.text.trim().is_empty() {
                return Err(SitefigError::EmptyLabel {
                    context: format!("item linking to '{}'", item.link),
                });
            }
        }
        NavEntry::Group(group) => {
            if group.text.trim().is_empty() {
                return Err(SitefigError::EmptyLabel {
                    context: format!("group with {} item(s)", group.items.len()),
                });
            }
            for child in &group.items {
                check_labels(child)?;
            }
        }
    }
    Ok(())
}

/// Lazy depth-first walk over the leaves of a menu.
///
/// Holds one slice iterator per open group, so memory is bounded by nesting
/// depth rather than tree size.
#[derive(Debug, Clone)]
pub struct FlattenLinks<'a> {
    stack: Vec<std::slice::Iter<'a, NavEntry>>,
}

impl<'a> FlattenLinks<'a> {
    pub(crate) fn new(entries: &'a [NavEntry]) -> Self {
        Self {
            stack: vec![entries.iter()],
        }
    }
}

impl<'a> Iterator for FlattenLinks<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(NavEntry::Item(item)) => {
                    return Some((item.text.as_str(), item.link.as_str()));
                }
                Some(NavEntry::Group(group)) => self.stack.push(group.items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{gokku_guide_sidebar, gokku_nav};

    fn links(tree: &NavigationTree) -> Vec<&str> {
        tree.flatten_links().map(|(_, link)| link).collect()
    }

    #[test]
    fn flatten_is_depth_first_in_display_order() {
        let mut tree = NavigationTree::new();
        tree.add_group(
            NavGroup::new("Outer")
                .item("A", "/a")
                .group(NavGroup::new("Inner").item("B", "/b").item("C", "/c"))
                .item("D", "/d"),
        )
        .unwrap();
        tree.add_group(NavGroup::new("Next").item("E", "/e")).unwrap();

        assert_eq!(links(&tree), ["/a", "/b", "/c", "/d", "/e"]);
    }

    #[test]
    fn flatten_yields_labels_with_links() {
        let tree = gokku_guide_sidebar();
        let first = tree.flatten_links().next().unwrap();
        assert_eq!(first, ("What is Gokku?", "/guide/what-is-gokku"));
    }

    #[test]
    fn flatten_is_restartable() {
        let tree = gokku_guide_sidebar();
        let iter = tree.flatten_links();
        let first_pass: Vec<_> = iter.clone().collect();
        let second_pass: Vec<_> = iter.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 9);
        assert_eq!(tree.flatten_links().count(), 9);
    }

    #[test]
    fn duplicate_across_groups_rejected() {
        let mut tree = gokku_guide_sidebar();
        let before = tree.clone();
        let err = tree
            .add_group(
                NavGroup::new("More")
                    .item("Fresh", "/guide/fresh")
                    .item("Install", "/guide/installation"),
            )
            .unwrap_err();
        match err {
            SitefigError::DuplicateLink { link, label } => {
                assert_eq!(link, "/guide/installation");
                assert_eq!(label, "Install");
            }
            other => panic!("Expected DuplicateLink, got: {other:?}"),
        }
        // Rejected append leaves the tree untouched.
        assert_eq!(tree, before);
    }

    #[test]
    fn duplicate_within_one_group_rejected() {
        let mut tree = NavigationTree::new();
        let err = tree
            .add_group(
                NavGroup::new("Twice")
                    .item("One", "/same")
                    .group(NavGroup::new("Nested").item("Two", "/same")),
            )
            .unwrap_err();
        assert!(matches!(err, SitefigError::DuplicateLink { .. }));
        assert!(tree.is_empty());
    }

    #[test]
    fn duplicate_between_item_and_group_rejected() {
        let mut tree = NavigationTree::new();
        tree.add_item(NavItem::new("Guide", "/guide/getting-started"))
            .unwrap();
        let err = tree
            .add_group(NavGroup::new("Guide").item("Start", "/guide/getting-started"))
            .unwrap_err();
        assert!(matches!(err, SitefigError::DuplicateLink { .. }));
    }

    #[test]
    fn empty_group_label_rejected() {
        let mut tree = NavigationTree::new();
        let err = tree.add_group(NavGroup::new("")).unwrap_err();
        assert!(matches!(err, SitefigError::EmptyLabel { .. }));
    }

    #[test]
    fn whitespace_label_counts_as_empty() {
        let mut tree = NavigationTree::new();
        let err = tree.add_group(NavGroup::new("   ")).unwrap_err();
        assert!(matches!(err, SitefigError::EmptyLabel { .. }));
    }

    #[test]
    fn empty_nested_item_label_rejected() {
        let mut tree = NavigationTree::new();
        let err = tree
            .add_group(NavGroup::new("Fine").item("", "/guide/blank"))
            .unwrap_err();
        match err {
            SitefigError::EmptyLabel { context } => assert!(context.contains("/guide/blank")),
            other => panic!("Expected EmptyLabel, got: {other:?}"),
        }
    }

    #[test]
    fn empty_group_allowed() {
        let mut tree = NavigationTree::new();
        tree.add_group(NavGroup::new("Coming soon")).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.flatten_links().count(), 0);
    }

    #[test]
    fn nav_bar_items_and_groups_mix() {
        let tree = gokku_nav();
        assert_eq!(
            links(&tree),
            [
                "/",
                "/guide/getting-started",
                "/examples/",
                "/reference/configuration"
            ]
        );
        assert_eq!(tree.groups().count(), 0);
        assert!(tree.contains_link("/examples/"));
        assert!(!tree.contains_link("/examples"));
    }

    #[test]
    fn groups_skips_bare_items() {
        let mut tree = NavigationTree::new();
        tree.add(NavItem::new("Home", "/")).unwrap();
        tree.add(NavGroup::new("Docs").item("Intro", "/intro")).unwrap();
        let names: Vec<_> = tree.groups().map(|g| g.text.as_str()).collect();
        assert_eq!(names, ["Docs"]);
        assert_eq!(tree.entries().len(), 2);
    }

    #[test]
    fn serializes_as_plain_array() {
        let tree = gokku_guide_sidebar();
        let json = serde_json::to_value(&tree).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["text"], "Introduction");
        assert_eq!(json[2]["items"][0]["link"], "/guide/docker");
    }
}
