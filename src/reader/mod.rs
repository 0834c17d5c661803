//! Hardware inventory collection via the external dmidecode binary
//!
//! [`InventoryReader`] resolves dmidecode once at construction, then queries
//! each of the 22 standard keywords with `dmidecode -s <keyword>` and keeps
//! the answers in an in-memory record. Every call to [`InventoryReader::collect`]
//! re-queries all fields; there is no caching.

pub mod resolve;

pub use resolve::resolve_tool;

use crate::error::{DmiqError, Result};
use crate::keywords::KEYWORDS;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Mapping from keyword to retrieved value.
pub type Record = BTreeMap<String, String>;

/// Reads hardware identification fields from dmidecode.
#[derive(Debug)]
pub struct InventoryReader {
    tool_path: PathBuf,
    record: Record,
}

impl InventoryReader {
    /// Locate dmidecode via the `PATH` environment variable.
    ///
    /// Fails with [`DmiqError::ToolNotFound`] when no directory on the path
    /// contains the binary.
    pub fn new() -> Result<Self> {
        let search_path = std::env::var("PATH").unwrap_or_default();
        Self::with_search_path(&search_path)
    }

    /// Locate dmidecode on an explicit colon-delimited search path.
    pub fn with_search_path(search_path: &str) -> Result<Self> {
        let tool_path = resolve_tool(search_path, "dmidecode")?;
        info!(path = %tool_path.display(), "resolved dmidecode");
        Ok(Self {
            tool_path,
            record: Record::new(),
        })
    }

    /// The resolved dmidecode location. Fixed for the reader's lifetime.
    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }

    /// The current record. Empty until the first successful [`collect`].
    ///
    /// [`collect`]: InventoryReader::collect
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Query every keyword and rebuild the record.
    ///
    /// Each keyword is queried with `dmidecode -s <keyword>`; the first line
    /// of output is kept, trimmed of surrounding whitespace. If any
    /// invocation fails the whole pass fails and the previous record is left
    /// untouched.
    pub fn collect(&mut self) -> Result<&Record> {
        let mut record = Record::new();

        for keyword in KEYWORDS {
            let value = self.query(keyword)?;
            debug!(keyword, value = %value, "collected field");
            record.insert(keyword.to_string(), value);
        }

        self.record = record;
        Ok(&self.record)
    }

    fn query(&self, keyword: &str) -> Result<String> {
        let output = Command::new(&self.tool_path)
            .arg("-s")
            .arg(keyword)
            .output()
            .map_err(|e| DmiqError::Invocation {
                keyword: keyword.to_string(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DmiqError::Invocation {
                keyword: keyword.to_string(),
                detail: format!(
                    "dmidecode exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or("").trim().to_string())
    }
}
