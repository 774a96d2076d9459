//! `docmap check` – validate map files.

use anyhow::Result;
use docmap_core::UrlMap;
use std::io::Write;
use std::path::PathBuf;

pub fn run_check(files: &[PathBuf], out: &mut impl Write) -> Result<()> {
    for path in files {
        let map = UrlMap::load_from_path(path)?;
        writeln!(out, "{}: {} namespaces", path.display(), map.len())?;
    }
    Ok(())
}
