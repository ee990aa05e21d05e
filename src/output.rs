use crate::cursor::Cursor;
use crate::enumerator::Page;
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Paths each followed by a space, on one line, for shell substitution
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

/// Write a page and flush once at the end
pub fn write_page<W: Write>(out: W, page: &Page, format: OutputFormat) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    match format {
        OutputFormat::Plain => {
            for file in page.files() {
                writer.write_all(file.as_bytes())?;
                writer.write_all(b" ")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, page)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}

pub fn write_cursor<W: Write>(mut out: W, cursor: &Cursor, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            if cursor.last_returned.is_empty() {
                writeln!(out, "No cursor stored for {}", cursor.scope)?;
                return out.flush();
            }
            writeln!(out, "scope:   {}", cursor.scope)?;
            writeln!(out, "last:    {}", cursor.last_returned)?;
            if let Some(updated_at) = cursor.updated_at {
                writeln!(out, "updated: {}", updated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, cursor)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
