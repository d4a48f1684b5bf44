//! Entry rendering: long lines and compact listings

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::entry::Entry;

use super::config::OutputConfig;

/// Timestamp layout for long-format lines, e.g. `Mar 07 14:05`.
pub const TIME_FORMAT: &str = "%b %d %H:%M";

/// Everything on a long-format line before the name, including the trailing space.
pub fn long_prefix(entry: &Entry) -> String {
    format!(
        "{} {} {} {} {} {} ",
        entry.mode(),
        entry.hard_links(),
        entry.owner(),
        entry.group(),
        entry.size(),
        entry.modified().format(TIME_FORMAT)
    )
}

fn write_name<W: WriteColor>(out: &mut W, entry: &Entry, use_color: bool) -> io::Result<()> {
    if use_color && entry.is_dir() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", entry.name())?;
        out.reset()?;
    } else {
        write!(out, "{}", entry.name())?;
    }
    Ok(())
}

/// Write `entries` in the configured layout.
///
/// The list is written exactly as given. Long format writes one line per
/// entry; compact format writes a single line, or nothing for an empty list.
pub fn render<W: WriteColor>(
    out: &mut W,
    entries: &[Entry],
    config: &OutputConfig,
) -> io::Result<()> {
    if config.long_format {
        for entry in entries {
            write!(out, "{}", long_prefix(entry))?;
            write_name(out, entry, config.use_color)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    if entries.is_empty() {
        return Ok(());
    }
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            write!(out, "  ")?;
        }
        write_name(out, entry, config.use_color)?;
    }
    writeln!(out)
}
