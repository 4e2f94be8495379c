//! Text formats and file plumbing.
//!
//! - csrg: `a b`, `owner field newField`, `owner method desc newMethod`
//! - tiny v1: a `v1\t<root>\t<ns>...` header followed by tab separated
//!   `CLASS` / `FIELD` / `METHOD` rows
//!
//! Both tables implement [`ReadTable`] and [`WriteTable`]; the provided
//! methods add reader/writer and file variants on top of the text forms.

mod csrg;
mod tiny;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::base::Result;

pub use tiny::{MissingEntryPolicy, SaveOptions};

/// A table that can be (re)loaded from mapping text.
pub trait ReadTable {
    /// Replace the table's contents with the parsed `text`.
    ///
    /// On error the table is left unchanged.
    fn load(&mut self, text: &str) -> Result<()>;

    fn load_from_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.load(&text)
    }

    fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading mapping file");
        let text = fs::read_to_string(path)?;
        self.load(&text)
    }
}

/// A table that can be serialized to mapping text.
pub trait WriteTable {
    fn save(&self) -> Result<String>;

    fn save_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.save()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.save()?;
        debug!(path = %path.display(), bytes = text.len(), "saving mapping file");
        fs::write(path, text)?;
        Ok(())
    }
}

/// Append `columns` joined by `separator`, then a newline.
fn push_row(out: &mut String, separator: char, columns: &[&str]) {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(column);
    }
    out.push('\n');
}

/// Whether a line carries no entry.
fn is_skipped(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}
