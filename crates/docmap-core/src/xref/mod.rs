//! Cross-reference resolution for documentation links.
//!
//! Links look like `method@Gio.File.read` or `signal@GObject.Object::notify`.
//! The namespace picks a base URL from the [`UrlMap`]; the rest of the link
//! picks the page under it. Links that need a symbol index (`id@`, `type@`)
//! are not supported.

mod parse;

use thiserror::Error;

use crate::registry::UrlMap;

pub use parse::{Link, LinkKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("link {0:?} has no kind (expected kind@Namespace.Name)")]
    MissingKind(String),

    #[error("unsupported link kind {0:?}")]
    UnknownKind(String),

    #[error("malformed link {link:?}: {reason}")]
    Malformed { link: String, reason: String },
}

/// Resolve `link` to an absolute URL.
///
/// A well-formed link whose namespace has no registered base URL resolves to
/// `Ok(None)`.
pub fn resolve(map: &UrlMap, link: &str) -> Result<Option<String>, LinkError> {
    let link = Link::parse(link)?;
    Ok(resolve_link(map, &link))
}

pub fn resolve_link(map: &UrlMap, link: &Link) -> Option<String> {
    let base = map.get(&link.namespace)?;
    let sep = if base.ends_with('/') { "" } else { "/" };
    Some(format!("{base}{sep}{}", link.page()))
}
