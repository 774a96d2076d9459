//! `docmap get` – print the base URL of one namespace.

use anyhow::Result;
use docmap_core::UrlMap;
use std::io::Write;

/// Returns false when the namespace is not registered; nothing is written then.
pub fn run_get(map: &UrlMap, namespace: &str, out: &mut impl Write) -> Result<bool> {
    match map.get(namespace) {
        Some(url) => {
            writeln!(out, "{url}")?;
            Ok(true)
        }
        None => {
            tracing::debug!("no base URL for namespace {:?}", namespace);
            Ok(false)
        }
    }
}
