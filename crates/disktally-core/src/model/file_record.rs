/// A point-in-time snapshot of one file's metadata.
///
/// Records are created once per discovered file during a scan and never
/// mutated afterwards. Fields are crate-private so the snapshot cannot drift
/// from what was read at scan time; accessors hand out borrowed views.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

/// Owner value used when the platform has no notion of file ownership.
pub const OWNER_NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub(crate) path: PathBuf,
    pub(crate) size: u64,
    pub(crate) modified: DateTime<Local>,
    /// Suffix including the leading dot (".txt"), or empty.
    pub(crate) extension: CompactString,
    pub(crate) owner: CompactString,
    /// Depth below the scan root; the root's immediate children are level 1.
    pub(crate) level: usize,
}

impl FileRecord {
    /// Build a record from already-known values. The extension is derived
    /// from `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        size: u64,
        modified: DateTime<Local>,
        owner: impl Into<CompactString>,
        level: usize,
    ) -> Self {
        let path = path.into();
        let extension = extension_of(&path);
        Self {
            path,
            size,
            modified,
            extension,
            owner: owner.into(),
            level,
        }
    }

    /// Snapshot `path` (found beneath `root`) from its metadata.
    ///
    /// Fails only if the platform cannot report a modification time.
    pub fn from_metadata(
        root: &Path,
        path: PathBuf,
        metadata: &Metadata,
        owner: CompactString,
    ) -> io::Result<Self> {
        let modified = DateTime::<Local>::from(metadata.modified()?);
        let level = level_of(root, &path);
        Ok(Self::new(path, metadata.len(), modified, owner, level))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    pub fn extension(&self) -> &CompactString {
        &self.extension
    }

    pub fn owner(&self) -> &CompactString {
        &self.owner
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

/// The path's final suffix with its leading dot, or an empty string.
///
/// Dot-files such as `.bashrc` and names ending in a bare dot have no suffix.
pub fn extension_of(path: &Path) -> CompactString {
    match path.extension() {
        Some(ext) if !ext.is_empty() => {
            compact_str::format_compact!(".{}", ext.to_string_lossy())
        }
        _ => CompactString::default(),
    }
}

/// Depth of `path` relative to `root`, counted in path components.
pub fn level_of(root: &Path, path: &Path) -> usize {
    path.components()
        .count()
        .saturating_sub(root.components().count())
}
