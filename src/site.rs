//! The root aggregate handed to the renderer.

use serde::Serialize;
use toml::{Table, Value};

use crate::error::SitefigError;
use crate::link;
use crate::nav::NavigationTree;
use crate::sidebar::SidebarRegistry;
use crate::types::HeadTag;

/// A validated site configuration.
///
/// Every link in the nav bar and in every sidebar has passed
/// [`check_link`](crate::link::check_link), and `base_path` starts and ends
/// with `/`. Values are only produced by [`SiteConfig::build`],
/// [`SiteBuilder::build`], or composition, so these hold for any instance.
///
/// Serializes (see [`to_json`](Self::to_json)) to the payload the renderer
/// consumes:
///
/// ```json
/// {"title": "...", "description": "...", "basePath": "/", "nav": [...],
///  "sidebars": {"/guide/": [...]}, "metadata": {...}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) head: Vec<HeadTag>,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) ignore_dead_links: bool,
    pub(crate) nav: NavigationTree,
    pub(crate) sidebars: SidebarRegistry,
    pub(crate) metadata: Table,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SiteConfig {
    pub fn builder() -> SiteBuilder {
        SiteBuilder::default()
    }

    /// Assemble and validate a site from its three parts.
    ///
    /// The string keys `title`, `description`, `base`, and `version` and the
    /// boolean `ignore_dead_links` are lifted out of `metadata` into their
    /// typed fields; everything else is passed through untouched. Fails with [`SitefigError::MalformedLink`] if any
    /// link in `nav` or `sidebars` is not well-formed.
    pub fn build(
        nav: NavigationTree,
        sidebars: SidebarRegistry,
        mut metadata: Table,
    ) -> Result<SiteConfig, SitefigError> {
        let title = take_string(&mut metadata, "title")?;
        let description = take_string(&mut metadata, "description")?;
        let base_path = take_string(&mut metadata, "base")?;
        let version = take_string(&mut metadata, "version")?;
        let ignore_dead_links = match metadata.remove("ignore_dead_links") {
            None => false,
            Some(Value::Boolean(b)) => b,
            Some(other) => {
                return Err(SitefigError::invalid(
                    "ignore_dead_links",
                    format!("expected a boolean, found {}", other.type_str()),
                ));
            }
        };

        SiteBuilder {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            base_path,
            version,
            head: Vec::new(),
            ignore_dead_links,
            nav,
            sidebars,
            metadata,
        }
        .build()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Version label shown as a badge in the nav bar.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    /// Whether the renderer should skip its dead-link check.
    pub fn ignore_dead_links(&self) -> bool {
        self.ignore_dead_links
    }

    pub fn nav(&self) -> &NavigationTree {
        &self.nav
    }

    pub fn sidebars(&self) -> &SidebarRegistry {
        &self.sidebars
    }

    /// Passthrough data (theme, search, footer, social links, ...).
    pub fn metadata(&self) -> &Table {
        &self.metadata
    }

    /// Shorthand for `self.sidebars().resolve(path)`.
    pub fn sidebar_for(&self, path: &str) -> Option<&NavigationTree> {
        self.sidebars.resolve(path)
    }

    pub fn to_json(&self) -> Result<String, SitefigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SitefigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check(&self) -> Result<(), SitefigError> {
        check_base_path(&self.base_path)?;
        link::check_tree(&self.nav)?;
        for (_, tree) in self.sidebars.iter() {
            link::check_tree(tree)?;
        }
        for tag in &self.head {
            if tag.tag.trim().is_empty() {
                return Err(SitefigError::invalid("head", "tag name is empty"));
            }
        }
        Ok(())
    }
}

fn check_base_path(base: &str) -> Result<(), SitefigError> {
    if !base.starts_with('/') || !base.ends_with('/') {
        return Err(SitefigError::invalid(
            "base",
            format!("'{base}' must start and end with '/'"),
        ));
    }
    if base.chars().any(char::is_whitespace) {
        return Err(SitefigError::invalid(
            "base",
            format!("'{base}' contains whitespace"),
        ));
    }
    Ok(())
}

fn take_string(table: &mut Table, key: &str) -> Result<Option<String>, SitefigError> {
    match table.remove(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(SitefigError::invalid(
            key,
            format!("expected a string, found {}", other.type_str()),
        )),
    }
}

/// Builder for a [`SiteConfig`]. Nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct SiteBuilder {
    title: String,
    description: String,
    base_path: Option<String>,
    version: Option<String>,
    head: Vec<HeadTag>,
    ignore_dead_links: bool,
    nav: NavigationTree,
    sidebars: SidebarRegistry,
    metadata: Table,
}

impl SiteBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Base path the site is served under (default: `/`).
    pub fn base_path(mut self, base: impl Into<String>) -> Self {
        self.base_path = Some(base.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Append a `<head>` tag.
    pub fn head(mut self, tag: HeadTag) -> Self {
        self.head.push(tag);
        self
    }

    pub fn ignore_dead_links(mut self, ignore: bool) -> Self {
        self.ignore_dead_links = ignore;
        self
    }

    pub fn nav(mut self, nav: NavigationTree) -> Self {
        self.nav = nav;
        self
    }

    pub fn sidebars(mut self, sidebars: SidebarRegistry) -> Self {
        self.sidebars = sidebars;
        self
    }

    pub fn metadata(mut self, metadata: Table) -> Self {
        self.metadata = metadata;
        self
    }

    /// Validate and produce the site.
    pub fn build(self) -> Result<SiteConfig, SitefigError> {
        let site = SiteConfig {
            title: self.title,
            description: self.description,
            base_path: self.base_path.unwrap_or_else(|| "/".to_string()),
            version: self.version,
            head: self.head,
            ignore_dead_links: self.ignore_dead_links,
            nav: self.nav,
            sidebars: self.sidebars,
            metadata: self.metadata,
        };
        site.check()?;
        tracing::debug!(
            title = %site.title,
            nav_links = site.nav.flatten_links().count(),
            sidebars = site.sidebars.len(),
            "site config built"
        );
        Ok(site)
    }
}
