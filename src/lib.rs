//! Dmiq - Query dmidecode hardware identity fields
//!
//! Dmiq resolves the external `dmidecode` binary from a search path, queries
//! the 22 standard keyword strings, and renders the collected record as
//! JSON, categorized XML, or SQL statement text.
//!
//! # Example
//!
//! ```no_run
//! use dmiq::{InventoryReader, Sink, to_json};
//!
//! let mut reader = InventoryReader::new().unwrap();
//! reader.collect().unwrap();
//! let text = to_json(reader.record(), Sink::None).unwrap();
//! println!("{}", text);
//! ```

pub mod cli;
pub mod error;
pub mod keywords;
pub mod output;
pub mod reader;

pub use error::{DmiqError, Result};
pub use keywords::{Category, KEYWORDS};
pub use output::{to_json, to_sql, to_xml, Sink, SqlMode};
pub use reader::{resolve_tool, InventoryReader, Record};
