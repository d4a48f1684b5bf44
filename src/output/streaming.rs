//! Streaming text output
//!
//! `ListingFormatter` writes each section as soon as the traversal produces
//! it, so memory use stays bounded by the largest single directory.

use std::io::{self, Write};

use termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

use crate::error::ListError;
use crate::listing::{ListSummary, ListingOutput, Section};

use super::config::OutputConfig;
use super::render::render;

/// Plain-text listing formatter. Listing goes to `out`, errors to `err`.
pub struct ListingFormatter<W = StandardStream, E = io::Stderr> {
    config: OutputConfig,
    out: W,
    err: E,
}

impl ListingFormatter {
    /// Write to the process's stdout and stderr.
    ///
    /// Colour is used exactly when `config.use_color` is set.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
            err: io::stderr(),
        }
    }
}

impl ListingFormatter<NoColor<Vec<u8>>, Vec<u8>> {
    /// Capture output in memory, without colour.
    pub fn buffered(config: OutputConfig) -> Self {
        Self::new(config, NoColor::new(Vec::new()), Vec::new())
    }

    /// The captured (stdout, stderr) text.
    pub fn into_strings(self) -> (String, String) {
        (
            String::from_utf8_lossy(&self.out.into_inner()).into_owned(),
            String::from_utf8_lossy(&self.err).into_owned(),
        )
    }
}

impl<W: WriteColor, E: Write> ListingFormatter<W, E> {
    pub fn new(config: OutputConfig, out: W, err: E) -> Self {
        Self { config, out, err }
    }
}

impl<W: WriteColor, E: Write> ListingOutput for ListingFormatter<W, E> {
    fn section(&mut self, section: &Section<'_>) -> io::Result<()> {
        if section.separated {
            writeln!(self.out)?;
        }
        if section.show_header {
            if let Some(path) = section.path {
                writeln!(self.out, "{}:", path.display())?;
            }
        }
        if let Some(total) = section.total {
            writeln!(self.out, "total {}", total)?;
        }
        render(&mut self.out, section.entries, &self.config)
    }

    fn error(&mut self, err: &ListError) -> io::Result<()> {
        // Keep stdout ahead of stderr when both go to the same terminal.
        self.out.flush()?;
        writeln!(self.err, "myls: {}", err)
    }

    fn finish(&mut self, _summary: &ListSummary) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
