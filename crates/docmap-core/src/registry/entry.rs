//! A single namespace → base URL pair.

use serde::{Deserialize, Serialize};

/// One row of the registry.
///
/// On disk the fields are spelled `name` and `url` so map files stay short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "name")]
    pub namespace: String,
    #[serde(rename = "url")]
    pub base_url: String,
}

impl Entry {
    pub fn new(namespace: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            base_url: base_url.into(),
        }
    }
}

impl From<(&str, &str)> for Entry {
    fn from((namespace, base_url): (&str, &str)) -> Self {
        Self::new(namespace, base_url)
    }
}
