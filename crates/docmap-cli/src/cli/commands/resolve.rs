//! `docmap resolve` – turn documentation links into URLs.

use anyhow::{Context, Result};
use docmap_core::xref;
use docmap_core::UrlMap;
use std::io::Write;

/// Writes one URL per resolvable link to `out` and a note per unknown
/// namespace to `err`. Returns false if any namespace was unknown; a
/// malformed link is an error.
pub fn run_resolve(
    map: &UrlMap,
    links: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let mut all_found = true;
    for link in links {
        match xref::resolve(map, link).with_context(|| format!("resolve {link}"))? {
            Some(url) => writeln!(out, "{url}")?,
            None => {
                writeln!(err, "{link}: namespace has no documentation URL")?;
                all_found = false;
            }
        }
    }
    Ok(all_found)
}
