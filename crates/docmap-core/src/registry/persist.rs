//! Map files: TOML arrays of `[[namespace]]` tables, kept in file order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{Entry, UrlMap};

#[derive(Debug, Default, Serialize, Deserialize)]
struct MapFile {
    #[serde(default, rename = "namespace")]
    namespaces: Vec<Entry>,
}

/// Read the entries of one map file without checking them.
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read map file: {}", path.display()))?;
    let file: MapFile =
        toml::from_str(&data).with_context(|| format!("parse map file: {}", path.display()))?;
    Ok(file.namespaces)
}

impl UrlMap {
    /// Load a single map file on its own.
    pub fn load_from_path(path: &Path) -> Result<UrlMap> {
        let entries = read_entries(path)?;
        UrlMap::from_entries(entries).with_context(|| format!("invalid map file: {}", path.display()))
    }

    /// Built-in table (optional) followed by each map file in order.
    ///
    /// A namespace may appear only once across all sources.
    pub fn load(include_builtin: bool, map_files: &[PathBuf]) -> Result<UrlMap> {
        let mut entries = if include_builtin {
            UrlMap::builtin().entries
        } else {
            Vec::new()
        };
        for path in map_files {
            let more = read_entries(path)?;
            tracing::debug!("read {} namespaces from {}", more.len(), path.display());
            entries.extend(more);
        }
        let map = UrlMap::from_entries(entries).context("build namespace map")?;
        tracing::debug!(
            "namespace map ready: {} entries (builtin={})",
            map.len(),
            include_builtin
        );
        Ok(map)
    }

    /// Serialize in the map-file format.
    pub fn to_toml(&self) -> Result<String> {
        let file = MapFile {
            namespaces: self.entries.clone(),
        };
        toml::to_string_pretty(&file).context("serialize namespace map")
    }
}
