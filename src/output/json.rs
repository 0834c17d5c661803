//! JSON output formatting

use crate::error::Result;
use crate::keywords::KEYWORDS;
use crate::output::sink::Sink;
use crate::reader::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Render the record as a flat, pretty-printed JSON object.
///
/// Keys appear in keyword-list order with 4-space indentation. The text is
/// written to `sink` and returned either way.
pub fn to_json(record: &Record, mut sink: Sink) -> Result<String> {
    let mut object = serde_json::Map::new();
    for keyword in KEYWORDS {
        if let Some(value) = record.get(keyword) {
            object.insert(keyword.to_string(), Value::String(value.clone()));
        }
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Value::Object(object).serialize(&mut ser)?;

    let text = String::from_utf8_lossy(&buf).into_owned();
    sink.write(&text)?;
    Ok(text)
}
