//! Errors raised while building a registry.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// Two entries claim the same namespace.
    #[error("namespace {0:?} is registered more than once")]
    DuplicateNamespace(String),

    #[error("entry #{index} has an empty namespace")]
    EmptyNamespace { index: usize },

    #[error("namespace {namespace:?} has an empty base URL")]
    EmptyUrl { namespace: String },
}
