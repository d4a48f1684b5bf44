//! Traversal engine: collect, order and emit each directory, depth-first

use std::io;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::ListError;
use crate::metadata::{FsMetadata, MetadataSource, RawEntry};

use super::collector::collect;
use super::config::ListOptions;
use super::order::{order, total_blocks};

/// One block of listing output: a directory's entries, or the group of
/// file operands given on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    /// Directory being listed; `None` for the file-operand group.
    pub path: Option<&'a Path>,
    /// Print a `<path>:` header line.
    pub show_header: bool,
    /// Print a blank line before anything else, separating this section from the previous one.
    pub separated: bool,
    /// Block total for the `total <N>` line (long format only).
    pub total: Option<u64>,
    /// Entries in display order.
    pub entries: &'a [Entry],
}

/// Receives the listing as it is produced.
pub trait ListingOutput {
    fn section(&mut self, section: &Section<'_>) -> io::Result<()>;

    /// Report a path that could not be listed. Traversal continues afterwards.
    fn error(&mut self, err: &ListError) -> io::Result<()>;

    fn finish(&mut self, summary: &ListSummary) -> io::Result<()>;
}

/// Outcome of a listing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    /// Directories whose contents were listed
    pub directories: usize,
    /// Entries rendered, across all sections
    pub entries: usize,
    /// A root operand could not be accessed
    pub root_failed: bool,
    /// Entries or subdirectories that could not be read
    pub minor_failures: usize,
}

impl ListSummary {
    /// Process exit status: 2 for an inaccessible operand, 1 for lesser
    /// failures, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.root_failed {
            2
        } else if self.minor_failures > 0 {
            1
        } else {
            0
        }
    }
}

struct TraversalState {
    summary: ListSummary,
    sections: usize,
    show_headers: bool,
}

impl TraversalState {
    fn next_separated(&mut self) -> bool {
        let separated = self.sections > 0;
        self.sections += 1;
        separated
    }
}

/// Lists root operands, recursing into subdirectories when asked to.
pub struct Lister<S = FsMetadata> {
    options: ListOptions,
    source: S,
}

impl Lister<FsMetadata> {
    /// A lister backed by the host filesystem.
    pub fn with_fs(options: ListOptions) -> Self {
        Self::new(options, FsMetadata::new())
    }
}

impl<S: MetadataSource> Lister<S> {
    pub fn new(options: ListOptions, source: S) -> Self {
        Self { options, source }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// List every root operand, in order. An empty slice lists `.`.
    ///
    /// Regular-file operands are listed first as one group, then each
    /// directory operand. Paths that cannot be read are reported through
    /// `output` and skipped; only write failures on `output` return `Err`.
    pub fn list<O: ListingOutput>(
        &self,
        roots: &[PathBuf],
        output: &mut O,
    ) -> io::Result<ListSummary> {
        let default_root = [PathBuf::from(".")];
        let roots = if roots.is_empty() { &default_root[..] } else { roots };

        let mut state = TraversalState {
            summary: ListSummary::default(),
            sections: 0,
            show_headers: self.options.recursive || roots.len() > 1,
        };

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for root in roots {
            let raw = RawEntry::followed(root.to_string_lossy(), root);
            match self.source.resolve(&raw) {
                Ok(entry) if entry.is_dir() => dirs.push(root.as_path()),
                Ok(entry) => files.push(entry),
                Err(err) => {
                    state.summary.root_failed = true;
                    output.error(&as_not_found(err))?;
                }
            }
        }

        if !files.is_empty() {
            let files = order(files, &self.options);
            let separated = state.next_separated();
            output.section(&Section {
                path: None,
                show_header: false,
                separated,
                total: None,
                entries: &files,
            })?;
            state.summary.entries += files.len();
        }

        for dir in dirs {
            self.visit(dir, true, &mut state, output)?;
        }

        output.finish(&state.summary)?;
        Ok(state.summary)
    }

    fn visit<O: ListingOutput>(
        &self,
        path: &Path,
        is_root: bool,
        state: &mut TraversalState,
        output: &mut O,
    ) -> io::Result<()> {
        tracing::debug!(dir = %path.display(), "visiting");

        let collection = match collect(path, &self.options, &self.source) {
            Ok(c) => c,
            Err(err) => {
                if is_root {
                    state.summary.root_failed = true;
                } else {
                    state.summary.minor_failures += 1;
                }
                return output.error(&err);
            }
        };
        for err in &collection.errors {
            state.summary.minor_failures += 1;
            output.error(err)?;
        }

        let entries = order(collection.entries, &self.options);
        let separated = state.next_separated();
        output.section(&Section {
            path: Some(path),
            show_header: state.show_headers,
            separated,
            total: self.options.long_format.then(|| total_blocks(&entries)),
            entries: &entries,
        })?;
        state.summary.directories += 1;
        state.summary.entries += entries.len();

        if self.options.recursive {
            for entry in entries.iter().filter(|e| e.is_dir() && !e.is_pseudo()) {
                self.visit(entry.path(), false, state, output)?;
            }
        }
        Ok(())
    }
}

/// A root operand that cannot be stat-ed is reported as missing.
fn as_not_found(err: ListError) -> ListError {
    match err {
        ListError::Metadata { path, source } => ListError::NotFound { path, source },
        other => other,
    }
}
