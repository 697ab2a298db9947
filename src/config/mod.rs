//! Tool configuration: the `[tools]` section of `toolcheck.toml`.
//!
//! Reads go through serde; writes go through a format-preserving TOML
//! editor so unrelated sections and comments in the user's file survive
//! create/update/delete operations.

pub mod manager;
pub mod schema;

pub use manager::{ConfigManager, ToolUpdate};
pub use schema::ToolConfig;

use std::collections::BTreeMap;
use std::path::Path;

/// Read the tool entries from a config file.
///
/// A missing file or missing `[tools]` section yields an empty map with
/// a warning rather than an error, so an audit can still render an
/// empty report.
pub fn read_tools(path: &Path) -> crate::Result<BTreeMap<String, ToolConfig>> {
    let mut manager = ConfigManager::new(path);
    if !manager.read()? {
        tracing::warn!("config section not found, expected [tools] with entries");
    }
    Ok(manager.tools)
}
