pub mod config;
pub mod logging;

pub mod export;
pub mod registry;
pub mod xref;

pub use registry::{Entry, UrlMap};
