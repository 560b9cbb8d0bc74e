use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitefigError {
    #[error("Empty label on {context}")]
    EmptyLabel { context: String },

    #[error("Duplicate link '{link}' (declared again as '{label}')")]
    DuplicateLink { link: String, label: String },

    #[error("Sidebar prefix '{prefix}' conflicts with registered prefix '{existing}'")]
    ConflictingPrefix { prefix: String, existing: String },

    #[error("Malformed link '{link}': {reason}")]
    MalformedLink { link: String, reason: String },

    #[error("Plugin '{plugin}' (#{index}) failed: {source}")]
    PluginComposition {
        index: usize,
        plugin: String,
        source: Box<SitefigError>,
    },

    #[error("Metadata key '{key}' is already set")]
    MetadataConflict { key: String },

    #[error("Unknown plugin '{name}' (available: {})", .available.join(", "))]
    UnknownPlugin {
        name: String,
        available: Vec<String>,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Unknown key '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Unknown keys in site file")]
    UnknownKeys(Vec<SitefigError>),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No {file_name} found in {start} or any parent directory")]
    SiteFileNotFound { file_name: String, start: PathBuf },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] confique::Error),

    #[error("Failed to serialize site payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SitefigError {
    /// The innermost error, looking through plugin wrappers.
    pub fn root_cause(&self) -> &SitefigError {
        match self {
            SitefigError::PluginComposition { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub(crate) fn malformed(link: &str, reason: impl Into<String>) -> Self {
        SitefigError::MalformedLink {
            link: link.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SitefigError::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_formats_correctly() {
        let err = SitefigError::UnknownKey {
            key: "sidebars".into(),
            path: "/srv/docs/site.toml".into(),
            line: 42,
        };
        let msg = err.to_string();
        assert!(msg.contains("sidebars"));
        assert!(msg.contains("site.toml"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn not_found_names_file_and_start() {
        let err = SitefigError::SiteFileNotFound {
            file_name: "site.toml".into(),
            start: "/srv/docs/guide".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("site.toml"));
        assert!(msg.contains("/srv/docs/guide"));
    }

    #[test]
    fn duplicate_link_names_the_link() {
        let err = SitefigError::DuplicateLink {
            link: "/guide/installation".into(),
            label: "Install".into(),
        };
        assert!(err.to_string().contains("/guide/installation"));
    }

    #[test]
    fn plugin_composition_names_plugin_and_cause() {
        let err = SitefigError::PluginComposition {
            index: 1,
            plugin: "mermaid".into(),
            source: Box::new(SitefigError::ConflictingPrefix {
                prefix: "/guide/".into(),
                existing: "/guide/".into(),
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("mermaid"));
        assert!(msg.contains("#1"));
        assert!(msg.contains("/guide/"));
    }

    #[test]
    fn unknown_plugin_lists_available() {
        let err = SitefigError::UnknownPlugin {
            name: "mermaidd".into(),
            available: vec!["mermaid".into(), "search".into()],
        };
        assert!(err.to_string().contains("mermaid, search"));
    }

    #[test]
    fn root_cause_unwraps_nested_plugins() {
        let err = SitefigError::PluginComposition {
            index: 0,
            plugin: "outer".into(),
            source: Box::new(SitefigError::PluginComposition {
                index: 2,
                plugin: "inner".into(),
                source: Box::new(SitefigError::MetadataConflict {
                    key: "search.provider".into(),
                }),
            }),
        };
        assert!(matches!(
            err.root_cause(),
            SitefigError::MetadataConflict { key } if key == "search.provider"
        ));
    }
}
