//! Strict-mode validation: detect unknown keys in site files.
//!
//! Uses `serde_ignored` to deserialize into `C::Layer` (all-optional fields) and
//! capture any keys that the layer doesn't consume. Reports each unknown key with
//! its file path and best-effort line number.

use std::path::Path;

use confique::Config;
use serde::Deserialize;

use crate::error::SitefigError;

/// Dotted paths of every key in `content` that config type `C` does not know.
///
/// Keys inside arrays of tables carry their index, e.g. `nav.2.txt`.
pub fn collect_unknown_keys<C: Config>(
    content: &str,
    path: &Path,
) -> Result<Vec<String>, SitefigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let mut unknown_keys: Vec<String> = Vec::new();

    let deserializer = toml::Deserializer::new(content);
    let _layer: C::Layer = serde_ignored::deserialize(deserializer, |ignored_path| {
        unknown_keys.push(display_key(&ignored_path.to_string()));
    })
    .map_err(|e| SitefigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(unknown_keys)
}

/// Drop the `?` segments serde_ignored emits for `Option` layers, so
/// `nav.?.0.href` reads as `nav.0.href`.
fn display_key(raw: &str) -> String {
    raw.split('.')
        .filter(|segment| *segment != "?")
        .collect::<Vec<_>>()
        .join(".")
}

/// Validate that a TOML site file contains no keys unknown to config type `C`.
pub fn validate_unknown_keys<C: Config>(content: &str, path: &Path) -> Result<(), SitefigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let unknown_keys = collect_unknown_keys::<C>(content, path)?;
    if unknown_keys.is_empty() {
        return Ok(());
    }

    let errors: Vec<SitefigError> = unknown_keys
        .into_iter()
        .map(|key| {
            let line = find_key_line(content, &key);
            SitefigError::UnknownKey {
                key,
                path: path.to_path_buf(),
                line,
            }
        })
        .collect();

    Err(SitefigError::UnknownKeys(errors))
}

/// Find the 1-indexed line number for a key in TOML content.
///
/// For a dotted key like `"sidebar.0.groups.1.txt"`, array indices are dropped
/// and the remaining segments (`sidebar.groups`) must match the current
/// `[section]` or `[[array]]` header. The first matching leaf assignment wins,
/// so with repeated `[[array]]` blocks this may point at an earlier block.
///
/// Does not look inside inline tables. Returns 0 if the key cannot be located.
pub(crate) fn find_key_line(content: &str, dotted_key: &str) -> usize {
    let segments: Vec<&str> = dotted_key
        .split('.')
        .filter(|s| *s != "?" && s.parse::<usize>().is_err())
        .collect();
    let Some((leaf, expected_section)) = segments.split_last() else {
        return 0;
    };

    let mut current_section: Vec<String> = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') {
            let header = trimmed.trim_start_matches('[').trim_end_matches(']').trim();
            current_section = header.split('.').map(|s| s.trim().to_string()).collect();
            continue;
        }

        let in_right_section = expected_section.len() == current_section.len()
            && expected_section
                .iter()
                .zip(&current_section)
                .all(|(a, b)| *a == b);

        if in_right_section
            && let Some(after_key) = trimmed.strip_prefix(leaf)
            && after_key.trim_start().starts_with('=')
        {
            return i + 1;
        }
    }
    0
}
