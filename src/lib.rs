//! Navigation and site configuration for static documentation sites.
//!
//! sitefig assembles the payload a documentation renderer needs: site
//! identity (title, description, base path, version badge), the top nav bar,
//! per-section sidebars, `<head>` tags, and a passthrough table of theme
//! settings. Every link is checked and every menu is free of duplicate links
//! before a [`SiteConfig`] exists.
//!
//! # Building a site in code
//!
//! ```
//! use sitefig::{NavigationTree, SidebarRegistry, SiteConfig};
//! use sitefig::types::{NavGroup, NavItem};
//!
//! let mut nav = NavigationTree::new();
//! nav.add_item(NavItem::new("Guide", "/guide/getting-started"))?;
//!
//! let mut guide = NavigationTree::new();
//! guide.add_group(
//!     NavGroup::new("Introduction")
//!         .item("What is Gokku?", "/guide/what-is-gokku")
//!         .item("Getting Started", "/guide/getting-started"),
//! )?;
//! let mut sidebars = SidebarRegistry::new();
//! sidebars.register("/guide/", guide)?;
//!
//! let site = SiteConfig::builder()
//!     .title("Gokku")
//!     .nav(nav)
//!     .sidebars(sidebars)
//!     .build()?;
//! assert!(site.sidebar_for("/guide/installation").is_some());
//! # Ok::<(), sitefig::SitefigError>(())
//! ```
//!
//! # Loading a site file
//!
//! [`Sitefig::loader()`] finds the nearest `site.toml`, rejects unknown keys,
//! fills in defaults, and composes any plugins the file lists:
//!
//! ```
//! use sitefig::Sitefig;
//! use sitefig::compose::plugin_fn;
//!
//! let site = Sitefig::loader()
//!     .plugin(plugin_fn("mermaid", |ext| ext.set_metadata("mermaid.theme", "default")))
//!     .load_str(r#"
//! title = "Gokku"
//! plugins = ["mermaid"]
//!
//! [[nav]]
//! text = "Guide"
//! link = "/guide/getting-started"
//!
//! [theme]
//! logo = "/logo.svg"
//! "#)?;
//! assert_eq!(site.metadata()["mermaid"]["theme"].as_str(), Some("default"));
//! # Ok::<(), sitefig::SitefigError>(())
//! ```
//!
//! Use [`Sitefig::template()`] for a commented starting point.
//!
//! # Plugins
//!
//! A [`Plugin`](compose::Plugin) extends a site through an append-only
//! [`Extension`](compose::Extension): it can add nav entries, register new
//! sidebars, add metadata keys, and append head tags, but never edit what is
//! already there. Plugins run in the order listed. The first error stops
//! composition and is reported as [`SitefigError::PluginComposition`] naming
//! the plugin; nothing is half-applied.
//!
//! # Output
//!
//! [`SiteConfig::to_json`] renders the renderer payload. Output is
//! deterministic: the same inputs always give byte-identical JSON.

pub mod compose;
pub mod error;
pub mod file;
pub mod link;
pub mod merge;
pub mod schema;
pub mod sitemap;
pub mod types;

mod builder;
mod nav;
mod resolve;
mod sidebar;
mod site;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::{SiteLoader, Sitefig};
pub use compose::{Composer, Plugin, PluginRegistry, compose};
pub use error::SitefigError;
pub use nav::{FlattenLinks, NavigationTree};
pub use resolve::{ResolveInput, resolve};
pub use sidebar::SidebarRegistry;
pub use site::{SiteBuilder, SiteConfig};
pub use sitemap::{Sitemap, SitemapEntry, sitemap};
pub use types::{Boundary, HeadTag, NavEntry, NavGroup, NavItem, PrefixPolicy};
