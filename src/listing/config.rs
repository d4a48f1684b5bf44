//! The option set that drives collection, ordering and traversal

/// Listing options, resolved once from the command line and passed by
/// reference to every stage. Nothing downstream mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include hidden entries plus the `.` and `..` pseudo-entries.
    pub show_all: bool,
    /// Include hidden entries but not the pseudo-entries.
    pub almost_all: bool,
    pub long_format: bool,
    pub recursive: bool,
    /// Re-sort by name, descending, after any other ordering.
    pub reverse_order: bool,
    /// Newest first.
    pub sort_by_time: bool,
    /// Glob patterns; matching children are never listed.
    pub ignore_patterns: Vec<String>,
}

impl ListOptions {
    /// Whether names starting with `.` are listed.
    pub fn shows_hidden(&self) -> bool {
        self.show_all || self.almost_all
    }
}
