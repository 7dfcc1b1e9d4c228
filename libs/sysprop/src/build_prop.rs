//! `build.prop` parsing
//!
//! Reads the `key=value` files found at the root of each partition into a
//! [`MemoryStore`], so the override logic can be exercised on a host against
//! a real device's properties.

use crate::{MemoryStore, Result};
use log::debug;
use std::path::Path;

/// Parse `build.prop` text into `(key, value)` pairs.
///
/// Blank lines, `#` comments, `import` directives and lines without `=` are
/// skipped. Keys and values are trimmed; everything after the first `=`
/// belongs to the value.
pub fn parse(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| !line.starts_with("import "))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Seed `store` with the properties in `text`; later keys win.
pub fn load_str(store: &mut MemoryStore, text: &str) -> usize {
    let props = parse(text);
    let count = props.len();
    for (key, value) in props {
        store.seed(key, value);
    }
    count
}

/// Seed `store` with the properties in the file at `path`
pub fn load_file(store: &mut MemoryStore, path: &Path) -> Result<usize> {
    let text = std::fs::read_to_string(path)?;
    let count = load_str(store, &text);
    debug!("Loaded {count} properties from {}", path.display());
    Ok(count)
}
