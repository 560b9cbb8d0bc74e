//! Building blocks of a navigation menu.
//!
//! A menu is a sequence of [`NavEntry`] values. Each entry is either a leaf
//! [`NavItem`] (a labeled link) or a [`NavGroup`] (a labeled, ordered list of
//! further entries). The distinction is an explicit enum discriminant, never
//! inferred from which fields happen to be present.
//!
//! ```
//! use sitefig::types::NavGroup;
//!
//! let intro = NavGroup::new("Introduction")
//!     .item("What is Gokku?", "/guide/what-is-gokku")
//!     .item("Getting Started", "/guide/getting-started");
//! assert_eq!(intro.items.len(), 2);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nav::FlattenLinks;

/// A single labeled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    /// Site-relative path (`/guide/intro`) or absolute URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A labeled, ordered collection of items and nested groups.
///
/// Order of `items` is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub text: String,
    pub items: Vec<NavEntry>,
}

impl NavGroup {
    /// An empty group. Empty groups are valid and render collapsed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            items: Vec::new(),
        }
    }

    /// Append a leaf link.
    pub fn item(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.items.push(NavEntry::Item(NavItem::new(text, link)));
        self
    }

    /// Append a nested group.
    pub fn group(mut self, group: NavGroup) -> Self {
        self.items.push(NavEntry::Group(group));
        self
    }

    /// Depth-first `(label, link)` pairs of every leaf under this group.
    pub fn flatten_links(&self) -> FlattenLinks<'_> {
        FlattenLinks::new(&self.items)
    }
}

/// Either a leaf link or a nested group.
///
/// Serializes to the shape static-site renderers expect: `{text, link}` for
/// items, `{text, items}` for groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    Item(NavItem),
    Group(NavGroup),
}

impl NavEntry {
    pub fn text(&self) -> &str {
        match self {
            NavEntry::Item(item) => &item.text,
            NavEntry::Group(group) => &group.text,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavEntry::Group(_))
    }
}

impl From<NavItem> for NavEntry {
    fn from(item: NavItem) -> Self {
        NavEntry::Item(item)
    }
}

impl From<NavGroup> for NavEntry {
    fn from(group: NavGroup) -> Self {
        NavEntry::Group(group)
    }
}

/// An extra element injected into every page's `<head>`, e.g. a favicon link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    pub tag: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

/// How a [`SidebarRegistry`](crate::SidebarRegistry) treats prefixes that
/// contain one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixPolicy {
    /// `/guide/` and `/guide/advanced/` may both be registered; a path is
    /// served by the longest matching prefix.
    #[default]
    Nested,
    /// No registered prefix may be a prefix of another.
    Disjoint,
}

/// Where the upward search for a site file stops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Walk all the way to the filesystem root.
    #[default]
    Root,
    /// Stop (inclusive) at the first directory containing an entry with this
    /// name, e.g. `.git`.
    Marker(&'static str),
}
