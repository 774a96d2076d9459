//! CLI command handlers, one per file.

mod check;
mod export;
mod get;
mod list;
mod resolve;

pub use check::run_check;
pub use export::run_export;
pub use get::run_get;
pub use list::run_list;
pub use resolve::run_resolve;
