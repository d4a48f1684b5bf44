//! myls - list directory contents
//!
//! The library holds the listing engine: metadata resolution, collection,
//! ordering, recursive traversal and rendering. The `myls` binary is a thin
//! command-line layer on top.

pub mod entry;
pub mod error;
pub mod listing;
pub mod logging;
pub mod metadata;
pub mod output;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, FileMode, UNKNOWN_IDENTITY};
pub use error::ListError;
pub use listing::{ListOptions, ListSummary, Lister, ListingOutput, Section, collect, order};
pub use metadata::{FsMetadata, IdentityLookup, MetadataSource, NoIdentities, RawEntry};
pub use output::{JsonFormatter, ListingFormatter, OutputConfig};
