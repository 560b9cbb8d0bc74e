use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::compose::{Plugin, PluginRegistry};
use crate::error::SitefigError;
use crate::file::{self, DEFAULT_FILE_NAME};
use crate::resolve::{self, ResolveInput};
use crate::schema;
use crate::site::SiteConfig;
use crate::types::Boundary;

/// Entry point for loading a site from a `site.toml`.
pub struct Sitefig;

impl Sitefig {
    pub fn loader() -> SiteLoader {
        SiteLoader::new()
    }

    /// A commented `site.toml` listing every key with its default.
    pub fn template() -> String {
        schema::template()
    }

    /// Write [`template`](Self::template) to `path`, creating parent directories.
    pub fn write_template(path: &Path) -> Result<(), SitefigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SitefigError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, Self::template()).map_err(|e| SitefigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Builder for locating, reading and resolving a site file.
///
/// By default the nearest `site.toml` at or above the current directory is
/// used, unknown keys are rejected, and no plugins are available.
pub struct SiteLoader {
    file_name: String,
    path: Option<PathBuf>,
    start_dir: Option<PathBuf>,
    boundary: Boundary,
    strict: bool,
    registry: PluginRegistry,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl SiteLoader {
    fn new() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            path: None,
            start_dir: None,
            boundary: Boundary::default(),
            strict: true,
            registry: PluginRegistry::new(),
            plugins: Vec::new(),
        }
    }

    /// File name to look for (default: `"site.toml"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    /// Load exactly this file, skipping discovery.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Directory the upward search starts from (default: the current directory).
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Where the upward search stops (default: [`Boundary::Root`]).
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Enable or disable strict mode (default: `true`).
    /// In strict mode, unknown keys in the site file produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Make a plugin available to the file's `plugins` list.
    ///
    /// Name clashes are reported when loading.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Start from an existing registry. Plugins added with
    /// [`plugin`](Self::plugin) are registered on top of it.
    pub fn registry(mut self, registry: PluginRegistry) -> Self {
        self.registry = registry;
        self
    }

    fn effective_registry(&self) -> Result<PluginRegistry, SitefigError> {
        let mut registry = self.registry.clone();
        for plugin in &self.plugins {
            registry.register_shared(Arc::clone(plugin))?;
        }
        Ok(registry)
    }

    fn locate(&self) -> Result<(PathBuf, String), SitefigError> {
        if let Some(path) = &self.path {
            let content = file::read_site_file(path)?;
            return Ok((path.clone(), content));
        }
        let start = match &self.start_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| SitefigError::IoError {
                path: PathBuf::from("."),
                source: e,
            })?,
        };
        file::load_site_file(&start, &self.file_name, &self.boundary)
    }

    /// Find, read, and resolve the site file.
    pub fn load(self) -> Result<SiteConfig, SitefigError> {
        let registry = self.effective_registry()?;
        let (path, content) = self.locate()?;
        resolve::resolve(
            ResolveInput {
                path,
                content,
                strict: self.strict,
            },
            &registry,
        )
    }

    /// Resolve in-memory site file content. Discovery is skipped; the
    /// configured path (or file name) only labels errors.
    pub fn load_str(self, content: &str) -> Result<SiteConfig, SitefigError> {
        let registry = self.effective_registry()?;
        let path = self
            .path
            .unwrap_or_else(|| PathBuf::from(&self.file_name));
        resolve::resolve(
            ResolveInput {
                path,
                content: content.to_string(),
                strict: self.strict,
            },
            &registry,
        )
    }
}
