use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::UrlMap;

/// Global configuration loaded from `~/.config/docmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocmapConfig {
    /// Start from the built-in GLib family table.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Extra map files, appended after the built-in entries in this order.
    #[serde(default)]
    pub map_files: Vec<PathBuf>,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for DocmapConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            map_files: Vec::new(),
        }
    }
}

impl DocmapConfig {
    /// Anchor relative `map_files` at `base` (the directory holding config.toml).
    fn rebase_map_files(&mut self, base: &Path) {
        for file in &mut self.map_files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// Build the namespace map described by this config plus `extra_files`.
    pub fn build_map(&self, extra_files: &[PathBuf], no_builtin: bool) -> Result<UrlMap> {
        let files: Vec<PathBuf> = self
            .map_files
            .iter()
            .chain(extra_files)
            .cloned()
            .collect();
        UrlMap::load(self.include_builtin && !no_builtin, &files)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocmapConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<DocmapConfig> {
    if !path.exists() {
        let default_cfg = DocmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let mut cfg: DocmapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    if let Some(dir) = path.parent() {
        cfg.rebase_map_files(dir);
    }
    Ok(cfg)
}
