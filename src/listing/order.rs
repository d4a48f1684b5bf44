//! Ordering policy for collected entries

use std::cmp::Ordering;

use crate::entry::Entry;

use super::config::ListOptions;

/// Byte-wise name comparison.
fn by_name(a: &Entry, b: &Entry) -> Ordering {
    a.name().as_bytes().cmp(b.name().as_bytes())
}

/// Newest first, ties broken by name.
fn by_time(a: &Entry, b: &Entry) -> Ordering {
    b.modified().cmp(&a.modified()).then_with(|| by_name(a, b))
}

/// Put entries in display order.
///
/// Entries are sorted by name, or by modification time (newest first) when
/// `sort_by_time` is set. `reverse_order` then applies a second, stable sort by
/// name *descending*. That pass does not flip the time order: `-t -r` lists
/// names in descending order, the same as `-r` alone.
pub fn order(mut entries: Vec<Entry>, options: &ListOptions) -> Vec<Entry> {
    if options.sort_by_time {
        entries.sort_by(by_time);
    } else {
        entries.sort_by(by_name);
    }

    if options.reverse_order {
        entries.sort_by(|a, b| by_name(b, a));
    }

    entries
}

/// Sum of block counts in 1024-byte units, as shown on the `total` line.
pub fn total_blocks(entries: &[Entry]) -> u64 {
    entries.iter().map(Entry::blocks).sum::<u64>() / 2
}
