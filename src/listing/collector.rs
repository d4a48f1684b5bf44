//! Entry collection: enumerate a directory and describe its children

use std::fs;
use std::path::Path;

use crate::entry::Entry;
use crate::error::{ListError, Result};
use crate::metadata::{MetadataSource, RawEntry};

use super::config::ListOptions;
use super::filter::VisibilityFilter;

/// The children of one directory, in no particular order.
#[derive(Debug, Default)]
pub struct Collection {
    pub entries: Vec<Entry>,
    /// Per-entry failures. The affected entries are missing from `entries`.
    pub errors: Vec<ListError>,
}

/// List the immediate children of `path`.
///
/// Fails only when the directory itself cannot be read. Children that cannot
/// be stat-ed are skipped and reported in [`Collection::errors`]. With
/// `show_all`, the `.` and `..` pseudo-entries are added when they can be
/// stat-ed and silently left out otherwise.
pub fn collect<S: MetadataSource + ?Sized>(
    path: &Path,
    options: &ListOptions,
    source: &S,
) -> Result<Collection> {
    let read_dir = fs::read_dir(path).map_err(|e| {
        if path.exists() {
            ListError::unreadable(path, e)
        } else {
            ListError::not_found(path, e)
        }
    })?;

    let mut collection = Collection::default();

    if options.show_all {
        for pseudo in [".", ".."] {
            match source.resolve(&RawEntry::followed(pseudo, path.join(pseudo))) {
                Ok(entry) => collection.entries.push(entry),
                Err(e) => tracing::debug!(
                    dir = %path.display(),
                    pseudo,
                    error = %e,
                    "omitting pseudo-entry"
                ),
            }
        }
    }

    let filter = VisibilityFilter::new(options);

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(d) => d,
            Err(e) => {
                collection.errors.push(ListError::metadata(path, e));
                continue;
            }
        };

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if !filter.is_visible(&name) {
            tracing::trace!(name, "filtered out");
            continue;
        }

        match source.resolve(&RawEntry::child(name, dir_entry.path())) {
            Ok(entry) => collection.entries.push(entry),
            Err(e) => collection.errors.push(e),
        }
    }

    tracing::debug!(
        dir = %path.display(),
        entries = collection.entries.len(),
        errors = collection.errors.len(),
        "collected directory"
    );
    Ok(collection)
}
