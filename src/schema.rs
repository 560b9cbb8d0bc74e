//! Schema of a `site.toml` file.
//!
//! [`SiteFile`] is a confique struct: its `///` comments become the comments
//! of the generated [`template`], and its `#[config(default)]` values fill in
//! whatever a file leaves out. Only `title` is required.
//!
//! Nav and sidebar entries are declared as tables with a `text` and exactly
//! one of `link` (a leaf) or `items` (a group):
//!
//! ```toml
//! [[nav]]
//! text = "Guide"
//! link = "/guide/getting-started"
//!
//! [[sidebar]]
//! prefix = "/guide/"
//!
//! [[sidebar.groups]]
//! text = "Introduction"
//! items = [{ text = "Getting Started", link = "/guide/getting-started" }]
//! ```

use confique::Config;
use serde::Deserialize;

use crate::error::SitefigError;
use crate::nav::NavigationTree;
use crate::sidebar::SidebarRegistry;
use crate::site::SiteConfig;
use crate::types::{HeadTag, NavEntry, NavGroup, NavItem, PrefixPolicy};

#[derive(Config, Debug)]
pub struct SiteFile {
    /// Site title, shown in the header and the browser tab.
    pub title: String,

    /// One-line summary used for the meta description tag.
    #[config(default = "")]
    pub description: String,

    /// Base path the site is served under. Must start and end with '/'.
    #[config(default = "/")]
    pub base: String,

    /// Version label shown as a badge in the nav bar.
    pub version: Option<String>,

    /// Plugins to compose, by name, in application order.
    #[config(default = [])]
    pub plugins: Vec<String>,

    /// Tell the renderer to skip its dead-link check.
    #[config(default = false)]
    pub ignore_dead_links: bool,

    /// Reject sidebar prefixes that contain one another.
    #[config(default = false)]
    pub disjoint_sidebars: bool,

    /// Extra tags injected into every page's <head>.
    #[config(default = [])]
    pub head: Vec<HeadTag>,

    /// Nav bar entries.
    #[config(default = [])]
    pub nav: Vec<EntryDecl>,

    /// Sidebars, one per path prefix.
    #[config(default = [])]
    pub sidebar: Vec<SidebarDecl>,

    /// Theme settings (logo, footer, search, social links) passed through to
    /// the renderer untouched.
    pub theme: Option<toml::Table>,
}

/// One declared nav entry, before it is known to be a leaf or a group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryDecl {
    #[serde(default)]
    pub text: String,
    pub link: Option<String>,
    pub items: Option<Vec<EntryDecl>>,
}

impl EntryDecl {
    /// Decide leaf vs group. Exactly one of `link` and `items` must be set.
    pub fn into_entry(self, context: &str) -> Result<NavEntry, SitefigError> {
        match (self.link, self.items) {
            (Some(link), None) => Ok(NavEntry::Item(NavItem {
                text: self.text,
                link,
            })),
            (None, Some(items)) => {
                let items = items
                    .into_iter()
                    .map(|decl| decl.into_entry(context))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(NavEntry::Group(NavGroup {
                    text: self.text,
                    items,
                }))
            }
            (Some(_), Some(_)) => Err(SitefigError::invalid(
                format!("{context} entry '{}'", self.text),
                "declares both `link` and `items`",
            )),
            (None, None) => Err(SitefigError::invalid(
                format!("{context} entry '{}'", self.text),
                "needs either `link` or `items`",
            )),
        }
    }
}

/// One declared sidebar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SidebarDecl {
    pub prefix: String,
    #[serde(default)]
    pub groups: Vec<EntryDecl>,
}

impl SiteFile {
    /// Turn the declarations into a validated site. Returns the site together
    /// with the plugin names it asks for.
    pub fn into_site(self) -> Result<(SiteConfig, Vec<String>), SitefigError> {
        let mut nav = NavigationTree::new();
        for decl in self.nav {
            nav.add(decl.into_entry("nav")?)?;
        }

        let policy = if self.disjoint_sidebars {
            PrefixPolicy::Disjoint
        } else {
            PrefixPolicy::Nested
        };
        let mut sidebars = SidebarRegistry::with_policy(policy);
        for decl in self.sidebar {
            let context = format!("sidebar '{}'", decl.prefix);
            let mut tree = NavigationTree::new();
            for group in decl.groups {
                tree.add(group.into_entry(&context)?)?;
            }
            sidebars.register(decl.prefix, tree)?;
        }

        let mut builder = SiteConfig::builder()
            .title(self.title)
            .description(self.description)
            .base_path(self.base)
            .ignore_dead_links(self.ignore_dead_links)
            .nav(nav)
            .sidebars(sidebars)
            .metadata(self.theme.unwrap_or_default());
        if let Some(version) = self.version {
            builder = builder.version(version);
        }
        for tag in self.head {
            builder = builder.head(tag);
        }

        Ok((builder.build()?, self.plugins))
    }
}

/// A commented `site.toml` template generated from [`SiteFile`].
pub fn template() -> String {
    confique::toml::template::<SiteFile>(confique::toml::FormatOptions::default())
}
