//! XML output formatting
//!
//! The record is rendered as a `<dmi>` document with one element per
//! hardware category. Keywords become attributes on their category element,
//! named with the category prefix stripped:
//!
//! ```xml
//! <dmi>
//!     <bios vendor="Acme" version="1.2" release-date="01/01/2024"/>
//!     ...
//! </dmi>
//! ```

use crate::error::{DmiqError, Result};
use crate::keywords::{attribute_name, Category, KEYWORDS};
use crate::output::sink::Sink;
use crate::reader::Record;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

const ROOT: &str = "dmi";

/// Render the record as 4-space-indented XML.
///
/// The text is written to `sink` and returned either way.
pub fn to_xml(record: &Record, mut sink: Sink) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer
        .write_event(Event::Start(BytesStart::new(ROOT)))
        .map_err(|e| DmiqError::XmlError(e.to_string()))?;

    for category in Category::ALL {
        let mut element = BytesStart::new(category.as_str());
        for keyword in KEYWORDS {
            if Category::of(keyword) != Some(category) {
                continue;
            }
            if let Some(value) = record.get(keyword) {
                element.push_attribute((attribute_name(keyword), value.as_str()));
            }
        }
        writer
            .write_event(Event::Empty(element))
            .map_err(|e| DmiqError::XmlError(e.to_string()))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(ROOT)))
        .map_err(|e| DmiqError::XmlError(e.to_string()))?;

    let text = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    sink.write(&text)?;
    Ok(text)
}
