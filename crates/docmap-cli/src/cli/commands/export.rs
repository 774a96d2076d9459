//! `docmap export` – print the table as TOML, JSON or urlmap.js.

use anyhow::Result;
use docmap_core::export::{self, ExportFormat};
use docmap_core::UrlMap;
use std::io::Write;

pub fn run_export(map: &UrlMap, format: ExportFormat, out: &mut impl Write) -> Result<()> {
    let rendered = export::render(map, format)?;
    out.write_all(rendered.as_bytes())?;
    tracing::debug!("exported {} namespaces as {}", map.len(), format);
    Ok(())
}
