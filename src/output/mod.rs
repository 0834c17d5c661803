//! Output formatting module

pub mod json;
pub mod sink;
pub mod sql;
pub mod xml;

pub use json::to_json;
pub use sink::Sink;
pub use sql::{to_sql, SqlMode};
pub use xml::to_xml;
