//! Output sinks for generated text

use crate::error::Result;
use std::io::Write;

/// Destination for serialized output.
///
/// Serializers always return the generated text; the sink only controls
/// where (and whether) it is additionally written.
#[derive(Default)]
pub enum Sink<'a> {
    /// Write to the process standard output.
    #[default]
    Stdout,
    /// Write to a caller-supplied writer.
    Writer(&'a mut dyn Write),
    /// Do not write anywhere.
    None,
}

impl Sink<'_> {
    pub(crate) fn write(&mut self, text: &str) -> Result<()> {
        match self {
            Sink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
            Sink::Writer(w) => {
                w.write_all(text.as_bytes())?;
            }
            Sink::None => {}
        }
        Ok(())
    }
}
