//! Plugin composition.
//!
//! A [`Plugin`] extends a site through an [`Extension`], which only exposes
//! append operations: add nav entries, register sidebars, merge new metadata
//! keys, add head tags. Nothing a plugin does can remove or rewrite what the
//! base config or an earlier plugin declared.
//!
//! [`compose`] applies plugins in order. The first failure aborts the whole
//! composition and is reported as [`SitefigError::PluginComposition`] with the
//! plugin's position and name; no partially composed site escapes.
//!
//! ```
//! use sitefig::{compose::{plugin_fn, Composer}, types::NavItem, SiteConfig};
//!
//! let base = SiteConfig::builder().title("Docs").build()?;
//! let site = Composer::new(base)
//!     .plugin(plugin_fn("examples", |ext| {
//!         ext.add_nav_item(NavItem::new("Examples", "/examples/"))
//!     }))
//!     .compose()?;
//! assert!(site.nav().contains_link("/examples/"));
//! # Ok::<(), sitefig::SitefigError>(())
//! ```

use std::sync::Arc;

use toml::{Table, Value};

use crate::error::SitefigError;
use crate::link;
use crate::merge;
use crate::nav::NavigationTree;
use crate::sidebar::SidebarRegistry;
use crate::site::SiteConfig;
use crate::types::{HeadTag, NavGroup, NavItem};

/// A named, append-only transformation of a [`SiteConfig`].
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, site: &mut Extension<'_>) -> Result<(), SitefigError>;
}

impl std::fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Plugin").field(&self.name()).finish()
    }
}

/// Append-only view of the site being composed.
pub struct Extension<'a> {
    site: &'a mut SiteConfig,
}

impl<'a> Extension<'a> {
    pub(crate) fn new(site: &'a mut SiteConfig) -> Self {
        Self { site }
    }

    /// Read-only view of everything composed so far.
    pub fn site(&self) -> &SiteConfig {
        &*self.site
    }

    pub fn nav(&self) -> &NavigationTree {
        &self.site.nav
    }

    pub fn sidebars(&self) -> &SidebarRegistry {
        &self.site.sidebars
    }

    pub fn metadata(&self) -> &Table {
        &self.site.metadata
    }

    /// Append a group to the nav bar.
    pub fn add_nav_group(&mut self, group: NavGroup) -> Result<(), SitefigError> {
        link::check_all(group.flatten_links())?;
        self.site.nav.add_group(group)
    }

    /// Append a bare link to the nav bar.
    pub fn add_nav_item(&mut self, item: NavItem) -> Result<(), SitefigError> {
        link::check_link(&item.link)?;
        self.site.nav.add_item(item)
    }

    /// Register a sidebar under a new prefix.
    pub fn register_sidebar(
        &mut self,
        prefix: impl Into<String>,
        tree: NavigationTree,
    ) -> Result<(), SitefigError> {
        link::check_tree(&tree)?;
        self.site.sidebars.register(prefix, tree)
    }

    /// Merge new metadata keys. See [`merge::additive_merge`] for what counts
    /// as a conflict.
    pub fn merge_metadata(&mut self, overlay: Table) -> Result<(), SitefigError> {
        let base = self.site.metadata.clone();
        self.site.metadata = merge::additive_merge(base, overlay)?;
        Ok(())
    }

    /// Set a single metadata value by dotted key, e.g. `"mermaid.theme"`.
    pub fn set_metadata(
        &mut self,
        dotted_key: &str,
        value: impl Into<Value>,
    ) -> Result<(), SitefigError> {
        let overlay = merge::dotted_table(dotted_key, value.into())?;
        self.merge_metadata(overlay)
    }

    pub fn add_head(&mut self, tag: HeadTag) -> Result<(), SitefigError> {
        if tag.tag.trim().is_empty() {
            return Err(SitefigError::invalid("head", "tag name is empty"));
        }
        self.site.head.push(tag);
        Ok(())
    }
}

/// A plugin built from a closure.
pub struct FnPlugin<F> {
    name: String,
    apply: F,
}

impl<F> Plugin for FnPlugin<F>
where
    F: Fn(&mut Extension<'_>) -> Result<(), SitefigError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, site: &mut Extension<'_>) -> Result<(), SitefigError> {
        (self.apply)(site)
    }
}

/// Wrap a closure as a named plugin.
pub fn plugin_fn<F>(name: impl Into<String>, apply: F) -> FnPlugin<F>
where
    F: Fn(&mut Extension<'_>) -> Result<(), SitefigError> + Send + Sync,
{
    FnPlugin {
        name: name.into(),
        apply,
    }
}

/// Apply `plugins` to `base` in order.
///
/// An empty plugin list returns `base` unchanged. On the first failure the
/// working copy is dropped and the error is wrapped with the plugin's index
/// and name.
pub fn compose<P>(base: SiteConfig, plugins: &[P]) -> Result<SiteConfig, SitefigError>
where
    P: AsRef<dyn Plugin>,
{
    let mut working = base;
    for (index, plugin) in plugins.iter().enumerate() {
        let plugin = plugin.as_ref();
        let mut ext = Extension::new(&mut working);
        plugin
            .apply(&mut ext)
            .map_err(|source| SitefigError::PluginComposition {
                index,
                plugin: plugin.name().to_string(),
                source: Box::new(source),
            })?;
        tracing::debug!(index, plugin = plugin.name(), "applied plugin");
    }
    if !plugins.is_empty() {
        tracing::info!(
            plugins = plugins.len(),
            nav_links = working.nav.flatten_links().count(),
            sidebars = working.sidebars.len(),
            "site composed"
        );
    }
    Ok(working)
}

/// Builder-style front end for [`compose`].
pub struct Composer {
    base: SiteConfig,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl Composer {
    pub fn new(base: SiteConfig) -> Self {
        Self {
            base,
            plugins: Vec::new(),
        }
    }

    /// Append a plugin. Plugins run in the order they are added.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Append already-shared plugins, e.g. from [`PluginRegistry::select`].
    pub fn plugins(mut self, plugins: impl IntoIterator<Item = Arc<dyn Plugin>>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    pub fn compose(self) -> Result<SiteConfig, SitefigError> {
        compose(self.base, &self.plugins)
    }
}

/// Plugins known to the host program, looked up by name.
///
/// Site files list plugins by name (`plugins = ["mermaid"]`); the registry
/// turns those names into plugin values.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a plugin available under its [`name`](Plugin::name).
    pub fn register(&mut self, plugin: impl Plugin + 'static) -> Result<(), SitefigError> {
        self.register_shared(Arc::new(plugin))
    }

    /// Like [`register`](Self::register), for a plugin that is already shared.
    pub fn register_shared(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), SitefigError> {
        if self.get(plugin.name()).is_some() {
            return Err(SitefigError::invalid(
                "plugins",
                format!("plugin '{}' is registered twice", plugin.name()),
            ));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Plugin>> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    /// Look up `names` in order, failing on the first unknown one.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Arc<dyn Plugin>>, SitefigError> {
        names
            .iter()
            .map(|name| {
                self.get(name.as_ref())
                    .cloned()
                    .ok_or_else(|| SitefigError::UnknownPlugin {
                        name: name.as_ref().to_string(),
                        available: self.names(),
                    })
            })
            .collect()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}
