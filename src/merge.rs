use toml::{Table, Value};

use crate::error::SitefigError;

/// Additively merge `overlay` into `base`.
///
/// - Keys only in `overlay` are added.
/// - If both sides hold a table, recurse.
/// - If both sides hold an array, `overlay`'s elements are appended.
/// - Equal values are left alone.
/// - Anything else would replace an existing value and fails with
///   [`SitefigError::MetadataConflict`] naming the dotted key.
pub fn additive_merge(base: Table, overlay: Table) -> Result<Table, SitefigError> {
    merge_at(base, overlay, "")
}

fn merge_at(mut base: Table, overlay: Table, prefix: &str) -> Result<Table, SitefigError> {
    for (key, overlay_val) in overlay {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let merged = match (base.remove(&key), overlay_val) {
            (None, overlay_val) => overlay_val,
            (Some(Value::Table(base_tbl)), Value::Table(overlay_tbl)) => {
                Value::Table(merge_at(base_tbl, overlay_tbl, &dotted)?)
            }
            (Some(Value::Array(mut base_arr)), Value::Array(overlay_arr)) => {
                base_arr.extend(overlay_arr);
                Value::Array(base_arr)
            }
            (Some(base_val), overlay_val) if base_val == overlay_val => base_val,
            (Some(_), _) => return Err(SitefigError::MetadataConflict { key: dotted }),
        };
        base.insert(key, merged);
    }
    Ok(base)
}

/// Expand a dotted key into a nested table holding `value`.
///
/// `("theme.footer.message", "MIT")` becomes `{theme = {footer = {message = "MIT"}}}`.
pub fn dotted_table(dotted_key: &str, value: Value) -> Result<Table, SitefigError> {
    if dotted_key.split('.').any(str::is_empty) {
        return Err(SitefigError::invalid(dotted_key, "empty segment in dotted key"));
    }
    let (parents, leaf) = match dotted_key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, dotted_key),
    };

    let mut table = Table::new();
    table.insert(leaf.to_string(), value);
    for segment in parents.into_iter().flat_map(|p| p.rsplit('.')) {
        let mut outer = Table::new();
        outer.insert(segment.to_string(), Value::Table(table));
        table = outer;
    }
    Ok(table)
}
