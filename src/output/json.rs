//! JSON output formatting

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::entry::Entry;
use crate::error::ListError;
use crate::listing::{ListSummary, ListingOutput, Section};

/// One listed section, as serialized.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSection {
    /// Directory path; absent for the group of file operands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub entries: Vec<Entry>,
}

/// Collects every section and prints them as one pretty-printed JSON array
/// when the listing finishes. Errors are still written as text to `err`.
pub struct JsonFormatter<W = io::Stdout, E = io::Stderr> {
    sections: Vec<JsonSection>,
    out: W,
    err: E,
}

impl JsonFormatter {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> JsonFormatter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            sections: Vec::new(),
            out,
            err,
        }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> ListingOutput for JsonFormatter<W, E> {
    fn section(&mut self, section: &Section<'_>) -> io::Result<()> {
        self.sections.push(JsonSection {
            path: section.path.map(|p| p.to_path_buf()),
            total: section.total,
            entries: section.entries.to_vec(),
        });
        Ok(())
    }

    fn error(&mut self, err: &ListError) -> io::Result<()> {
        writeln!(self.err, "myls: {}", err)
    }

    fn finish(&mut self, _summary: &ListSummary) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.sections).map_err(io::Error::other)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
