//! SQL statement text generation
//!
//! Values are interpolated into the statement verbatim, with no escaping or
//! parameterization. Callers feeding untrusted values must sanitize them
//! first; the interpolation lives entirely in [`to_sql`] so a parameterized
//! variant can replace it without touching the rest of the crate.

use crate::error::{DmiqError, Result};
use crate::keywords::{is_keyword, KEYWORDS};
use crate::output::sink::Sink;
use crate::reader::Record;
use std::str::FromStr;
use tracing::debug;

/// Statement kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlMode {
    Insert,
    Update,
}

impl FromStr for SqlMode {
    type Err = DmiqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "insert" => Ok(SqlMode::Insert),
            "update" => Ok(SqlMode::Update),
            _ => Err(DmiqError::InvalidMode(s.to_string())),
        }
    }
}

/// Build INSERT or UPDATE statement text for the record.
///
/// `keys` selects an ordered subset of the keyword list and defaults to the
/// full list; any key outside the list fails with
/// [`DmiqError::UnknownKeyword`] before any text is produced. The statement
/// is written to `sink` and returned either way.
pub fn to_sql(
    record: &Record,
    table: &str,
    id_column: &str,
    id_value: &str,
    mode: SqlMode,
    keys: Option<&[&str]>,
    mut sink: Sink,
) -> Result<String> {
    let keys: Vec<&str> = match keys {
        Some(keys) => keys.to_vec(),
        None => KEYWORDS.to_vec(),
    };

    for key in &keys {
        if !is_keyword(key) {
            return Err(DmiqError::UnknownKeyword(key.to_string()));
        }
    }

    let value_of = |key: &str| record.get(key).map(String::as_str).unwrap_or("");

    let statement = match mode {
        SqlMode::Insert => {
            let columns: Vec<String> = std::iter::once(id_column)
                .chain(keys.iter().copied())
                .map(|c| format!("'{}'", c))
                .collect();
            let values: Vec<String> = std::iter::once(id_value)
                .chain(keys.iter().map(|k| value_of(k)))
                .map(|v| format!("'{}'", v))
                .collect();
            format!(
                "INSERT into {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                values.join(", ")
            )
        }
        SqlMode::Update => {
            let assignments: Vec<String> = keys
                .iter()
                .map(|k| format!("{}=\"{}\"", k, value_of(k)))
                .collect();
            format!(
                "UPDATE {} SET ({}) WHERE {}={};",
                table,
                assignments.join(", "),
                id_column,
                id_value
            )
        }
    };

    debug!(statement = %statement, "generated SQL");
    sink.write(&statement)?;
    Ok(statement)
}
