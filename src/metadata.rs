//! Metadata resolution: turning a path on disk into an [`Entry`]
//!
//! Everything platform-specific about a listing (permission bits, block counts,
//! link counts, owner and group names) lives behind the [`MetadataSource`] and
//! [`IdentityLookup`] traits. Collection, ordering and rendering only ever see
//! the resulting [`Entry`] values.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryBuilder};
use crate::error::{ListError, Result};

/// A directory entry that has been enumerated but not yet described.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Name to display for the entry.
    pub name: String,
    /// Path used to stat the entry.
    pub path: PathBuf,
    /// Follow a symbolic link at `path` instead of describing the link itself.
    pub follow_links: bool,
}

impl RawEntry {
    /// A directory child, described without following links.
    pub fn child(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            follow_links: false,
        }
    }

    /// A path whose target should be described (pseudo-entries, root operands).
    pub fn followed(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            follow_links: true,
        }
    }
}

/// Source of entry metadata.
pub trait MetadataSource {
    /// Describe a single entry. Fails only when the entry cannot be stat-ed;
    /// unresolvable owner or group names fall back to `"unknown"`.
    fn resolve(&self, raw: &RawEntry) -> Result<Entry>;
}

impl<S: MetadataSource + ?Sized> MetadataSource for &S {
    fn resolve(&self, raw: &RawEntry) -> Result<Entry> {
        (**self).resolve(raw)
    }
}

/// Maps numeric user and group ids to names.
pub trait IdentityLookup {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Identity lookup that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentities;

impl IdentityLookup for NoIdentities {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

/// User and group database of the host, cached for the lifetime of the lookup.
#[cfg(unix)]
pub struct SystemIdentities {
    cache: uzers::UsersCache,
}

#[cfg(unix)]
impl SystemIdentities {
    pub fn new() -> Self {
        Self {
            cache: uzers::UsersCache::new(),
        }
    }
}

#[cfg(unix)]
impl Default for SystemIdentities {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl IdentityLookup for SystemIdentities {
    fn user_name(&self, uid: u32) -> Option<String> {
        use uzers::Users;
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        use uzers::Groups;
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
    }
}

#[cfg(not(unix))]
pub type SystemIdentities = NoIdentities;

/// Metadata source backed by the host filesystem.
pub struct FsMetadata<I = SystemIdentities> {
    identities: I,
}

impl FsMetadata<SystemIdentities> {
    pub fn new() -> Self {
        Self {
            identities: SystemIdentities::default(),
        }
    }
}

impl Default for FsMetadata<SystemIdentities> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdentityLookup> FsMetadata<I> {
    /// Use a custom identity lookup (e.g. [`NoIdentities`]).
    pub fn with_identities(identities: I) -> Self {
        Self { identities }
    }
}

impl<I: IdentityLookup> MetadataSource for FsMetadata<I> {
    fn resolve(&self, raw: &RawEntry) -> Result<Entry> {
        let metadata = if raw.follow_links {
            fs::metadata(&raw.path)
        } else {
            fs::symlink_metadata(&raw.path)
        }
        .map_err(|e| ListError::metadata(&raw.path, e))?;

        Ok(describe(&raw.name, &raw.path, &metadata, &self.identities))
    }
}

#[cfg(unix)]
fn describe(
    name: &str,
    path: &Path,
    metadata: &Metadata,
    identities: &impl IdentityLookup,
) -> Entry {
    use std::os::unix::fs::MetadataExt;

    use crate::entry::FileMode;

    let owner = identities.user_name(metadata.uid());
    if owner.is_none() {
        tracing::debug!(path = %path.display(), uid = metadata.uid(), "owner lookup failed");
    }
    let group = identities.group_name(metadata.gid());
    if group.is_none() {
        tracing::debug!(path = %path.display(), gid = metadata.gid(), "group lookup failed");
    }

    let builder = Entry::builder(name)
        .path(path)
        .mode(FileMode::from_raw(metadata.mode()))
        .size(metadata.size())
        .blocks(metadata.blocks())
        .owner(owner)
        .group(group)
        .hard_links(metadata.nlink());
    with_modified(builder, path, metadata).build()
}

#[cfg(not(unix))]
fn describe(
    name: &str,
    path: &Path,
    metadata: &Metadata,
    _identities: &impl IdentityLookup,
) -> Entry {
    use crate::entry::FileMode;

    let file_type = metadata.file_type();
    let write = if metadata.permissions().readonly() { 0 } else { 0o200 };
    let mode = if file_type.is_dir() {
        FileMode::dir(0o555 | write)
    } else if file_type.is_symlink() {
        FileMode::symlink()
    } else {
        FileMode::file(0o444 | write)
    };
    tracing::trace!(path = %path.display(), "synthesized metadata");

    let builder = Entry::builder(name)
        .path(path)
        .mode(mode)
        .size(metadata.len())
        .blocks(metadata.len().div_ceil(512));
    with_modified(builder, path, metadata).build()
}

/// Apply the modification time, keeping the epoch default when the platform
/// cannot report one.
fn with_modified(builder: EntryBuilder, path: &Path, metadata: &Metadata) -> EntryBuilder {
    match metadata.modified() {
        Ok(modified) => builder.modified(modified),
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "modification time unavailable, using epoch"
            );
            builder
        }
    }
}
