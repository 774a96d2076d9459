//! `docmap list` – show every namespace in declaration order.

use anyhow::Result;
use docmap_core::UrlMap;
use std::io::Write;

pub fn run_list(map: &UrlMap, out: &mut impl Write) -> Result<()> {
    if map.is_empty() {
        writeln!(out, "No namespaces registered.")?;
        return Ok(());
    }
    let width = map
        .namespaces()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("NAMESPACE".len());
    writeln!(out, "{:<width$}  {}", "NAMESPACE", "URL")?;
    for entry in map {
        writeln!(out, "{:<width$}  {}", entry.namespace, entry.base_url)?;
    }
    Ok(())
}
