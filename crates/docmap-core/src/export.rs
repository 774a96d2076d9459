//! Render a [`UrlMap`] for other tools.

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::registry::UrlMap;

/// Output format for `docmap export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Map-file format (`[[namespace]]` tables).
    #[default]
    Toml,
    /// Array of `[namespace, url]` pairs.
    Json,
    /// `urlmap.js` as loaded by the documentation generator's search page.
    Js,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "toml" => Ok(ExportFormat::Toml),
            "json" => Ok(ExportFormat::Json),
            "js" => Ok(ExportFormat::Js),
            other => anyhow::bail!("unknown export format {other:?} (expected toml, json or js)"),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Toml => "toml",
            ExportFormat::Json => "json",
            ExportFormat::Js => "js",
        })
    }
}

pub fn render(map: &UrlMap, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Toml => map.to_toml(),
        ExportFormat::Json => render_json(map),
        ExportFormat::Js => Ok(render_js(map)),
    }
}

fn render_json(map: &UrlMap) -> Result<String> {
    let pairs: Vec<[&str; 2]> = map
        .iter()
        .map(|e| [e.namespace.as_str(), e.base_url.as_str()])
        .collect();
    let mut out = serde_json::to_string_pretty(&pairs).context("serialize namespace map")?;
    out.push('\n');
    Ok(out)
}

fn render_js(map: &UrlMap) -> String {
    let rows: String = map
        .iter()
        .map(|entry| {
            format!(
                "    [ '{}', '{}' ],\n",
                js_escape(&entry.namespace),
                js_escape(&entry.base_url)
            )
        })
        .collect();
    format!(
        "\n// A map between namespaces and base URLs for their online documentation\nbaseURLs = [\n{rows}]\n"
    )
}

fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
