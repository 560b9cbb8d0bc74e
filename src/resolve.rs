//! Core resolution pipeline: turn site file content into a composed site.
//!
//! Operates on pre-loaded data (`ResolveInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs. Steps:
//!
//! 1. Check for unknown keys (error if strict, warn otherwise)
//! 2. Parse the content into a `toml::Table`
//! 3. Deserialize the table into the schema's layer
//! 4. Let confique fill defaults and validate required fields
//! 5. Convert declarations into a validated [`SiteConfig`]
//! 6. Look up the listed plugins and compose them onto the site

use std::path::PathBuf;

use confique::Config;
use toml::{Table, Value};

use crate::compose::{PluginRegistry, compose};
use crate::error::SitefigError;
use crate::schema::SiteFile;
use crate::site::SiteConfig;
use crate::validate;

/// All pre-loaded data needed to resolve a site. No I/O happens here.
pub struct ResolveInput {
    /// Where `content` came from. Only used in error messages.
    pub path: PathBuf,
    pub content: String,
    /// Whether to reject unknown keys.
    pub strict: bool,
}

/// Resolve a site from pre-loaded input, composing plugins from `plugins`.
pub fn resolve(input: ResolveInput, plugins: &PluginRegistry) -> Result<SiteConfig, SitefigError> {
    // 1: Unknown keys
    if input.strict {
        validate::validate_unknown_keys::<SiteFile>(&input.content, &input.path)?;
    } else {
        for key in validate::collect_unknown_keys::<SiteFile>(&input.content, &input.path)? {
            tracing::warn!(key = %key, path = %input.path.display(), "ignoring unknown key");
        }
    }

    // 2: Parse
    let table: Table = toml::from_str(&input.content).map_err(|e| SitefigError::ParseError {
        path: input.path.clone(),
        source: e,
    })?;

    // 3: Deserialize into the layer
    let layer: <SiteFile as Config>::Layer =
        Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| SitefigError::InvalidValue {
                key: input.path.display().to_string(),
                reason: e.to_string(),
            })?;

    // 4: confique fills defaults and validates required fields
    let file = SiteFile::builder().preloaded(layer).load()?;

    // 5: Declarations into a site
    let (site, names) = file.into_site()?;

    // 6: Plugins
    let selected = plugins.select(&names)?;
    let site = compose(site, &selected)?;

    tracing::info!(
        path = %input.path.display(),
        plugins = selected.len(),
        "site file loaded"
    );
    Ok(site)
}
