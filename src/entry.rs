//! The entry record produced for every listed filesystem object

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// Owner/group name used when a numeric id cannot be resolved.
pub const UNKNOWN_IDENTITY: &str = "unknown";

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// File type and permission bits, in the POSIX `st_mode` layout.
///
/// Non-Unix hosts synthesize the same layout so rendering does not depend on
/// the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    pub const fn from_raw(bits: u32) -> Self {
        Self(bits)
    }

    /// A regular file with the given permission bits.
    pub const fn file(perms: u32) -> Self {
        Self(S_IFREG | (perms & 0o7777))
    }

    /// A directory with the given permission bits.
    pub const fn dir(perms: u32) -> Self {
        Self(S_IFDIR | (perms & 0o7777))
    }

    /// A symbolic link (permissions are conventionally 0777).
    pub const fn symlink() -> Self {
        Self(S_IFLNK | 0o777)
    }

    pub fn is_dir(&self) -> bool {
        self.0 & S_IFMT == S_IFDIR
    }

    pub fn is_symlink(&self) -> bool {
        self.0 & S_IFMT == S_IFLNK
    }

    fn type_char(&self) -> char {
        match self.0 & S_IFMT {
            S_IFDIR => 'd',
            S_IFLNK => 'l',
            S_IFIFO => 'p',
            S_IFSOCK => 's',
            S_IFCHR => 'c',
            S_IFBLK => 'b',
            _ => '-',
        }
    }
}

impl fmt::Display for FileMode {
    /// Renders the ten-character symbolic form, e.g. `drwxr-xr-x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        let bit = |mask: u32, c: char| if m & mask != 0 { c } else { '-' };
        // Execute slot with a special bit layered on top (setuid, setgid, sticky).
        let exec = |mask: u32, special: u32, set: char, unset: char| {
            match (m & mask != 0, m & special != 0) {
                (true, true) => set,
                (false, true) => unset,
                (true, false) => 'x',
                (false, false) => '-',
            }
        };

        let symbolic: String = [
            self.type_char(),
            bit(0o400, 'r'),
            bit(0o200, 'w'),
            exec(0o100, S_ISUID, 's', 'S'),
            bit(0o040, 'r'),
            bit(0o020, 'w'),
            exec(0o010, S_ISGID, 's', 'S'),
            bit(0o004, 'r'),
            bit(0o002, 'w'),
            exec(0o001, S_ISVTX, 't', 'T'),
        ]
        .iter()
        .collect();
        f.write_str(&symbolic)
    }
}

impl Serialize for FileMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One filesystem object observed during a listing.
///
/// Built once by a [`MetadataSource`](crate::metadata::MetadataSource) and never
/// mutated afterwards; ordering only moves entries around.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    name: String,
    /// Where the entry lives on disk. Names are display strings and may be
    /// lossy, so recursion goes through this path instead.
    #[serde(skip)]
    path: PathBuf,
    mode: FileMode,
    size: u64,
    blocks: u64,
    modified: DateTime<Local>,
    owner: String,
    group: String,
    hard_links: u64,
    is_dir: bool,
}

impl Entry {
    /// Start building an entry with the given name.
    pub fn builder(name: impl Into<String>) -> EntryBuilder {
        EntryBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Allocated 512-byte blocks.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn hard_links(&self) -> u64 {
        self.hard_links
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// `.` or `..`
    pub fn is_pseudo(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// Builder for [`Entry`], used by metadata sources and tests.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    name: String,
    path: Option<PathBuf>,
    mode: FileMode,
    size: u64,
    blocks: u64,
    modified: DateTime<Local>,
    owner: Option<String>,
    group: Option<String>,
    hard_links: u64,
}

impl EntryBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            mode: FileMode::file(0o644),
            size: 0,
            blocks: 0,
            modified: DateTime::<Local>::from(std::time::UNIX_EPOCH),
            owner: None,
            group: None,
            hard_links: 1,
        }
    }

    /// On-disk location; defaults to the name itself.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn blocks(mut self, blocks: u64) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn modified(mut self, modified: impl Into<DateTime<Local>>) -> Self {
        self.modified = modified.into();
        self
    }

    /// Owner name; `None` falls back to [`UNKNOWN_IDENTITY`].
    pub fn owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self
    }

    /// Group name; `None` falls back to [`UNKNOWN_IDENTITY`].
    pub fn group(mut self, group: Option<String>) -> Self {
        self.group = group;
        self
    }

    pub fn hard_links(mut self, hard_links: u64) -> Self {
        self.hard_links = hard_links;
        self
    }

    pub fn build(self) -> Entry {
        // An empty name can only come from a bare root like "/"; show it as-is.
        let name = if self.name.is_empty() {
            "/".to_string()
        } else {
            self.name
        };
        Entry {
            path: self.path.unwrap_or_else(|| PathBuf::from(&name)),
            name,
            is_dir: self.mode.is_dir(),
            mode: self.mode,
            size: self.size,
            blocks: self.blocks,
            modified: self.modified,
            owner: self.owner.unwrap_or_else(|| UNKNOWN_IDENTITY.to_string()),
            group: self.group.unwrap_or_else(|| UNKNOWN_IDENTITY.to_string()),
            hard_links: self.hard_links.max(1),
        }
    }
}
