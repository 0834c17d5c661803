//! Search-path resolution for the external dmidecode binary

use crate::error::{DmiqError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Scan every directory in `search_path` for `tool` and return the resolved
/// location.
///
/// The whole path is scanned; when more than one directory contains the tool,
/// the last match wins. Entries later in the path deliberately override
/// earlier ones.
pub fn resolve_tool(search_path: &str, tool: &str) -> Result<PathBuf> {
    let mut resolved: Option<PathBuf> = None;

    for dir in std::env::split_paths(search_path) {
        let candidate = dir.join(tool);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found {} candidate", tool);
            resolved = Some(candidate);
        }
    }

    resolved.ok_or_else(|| DmiqError::ToolNotFound(search_path.to_string()))
}
