/// Two-pass directory walk: count regular files, then collect a
/// [`FileRecord`] for each.
///
/// Both passes use `jwalk` in serial mode. Symlinks are not followed and
/// hidden entries are included. Any unreadable directory or entry aborts
/// the pass with an error; nothing is skipped silently.
use crate::error::ScanError;
use crate::model::FileRecord;
use crate::platform::OwnerResolver;
use crate::scanner::progress::ProgressTracker;
use std::fs;
use std::path::Path;
use tracing::debug;

fn walker(root: &Path) -> jwalk::WalkDir {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
}

/// Entries of `walk`, failing on the first entry or directory that could
/// not be read.
///
/// jwalk reports a directory it failed to list on that directory's own
/// entry (`read_children_error`) and keeps walking, so that field is
/// checked for every entry.
fn checked_entries<C: jwalk::ClientState>(
    walk: jwalk::WalkDirGeneric<C>,
) -> impl Iterator<Item = Result<jwalk::DirEntry<C>, ScanError>> {
    walk.into_iter().map(|entry| {
        let mut entry = entry?;
        match entry.read_children_error.take() {
            Some(source) => Err(ScanError::Walk {
                path: Some(
                    source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| entry.path()),
                ),
                source,
            }),
            None => Ok(entry),
        }
    })
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// First pass: number of regular files under `root`.
pub fn count_files(root: &Path) -> Result<u64, ScanError> {
    let mut total: u64 = 0;
    for entry in checked_entries(walker(root)) {
        if entry?.file_type().is_file() {
            total += 1;
        }
    }
    debug!("Counted {total} files under {}", root.display());
    Ok(total)
}

/// Second pass: one record per regular file, in discovery order.
///
/// Advances `tracker` once per record.
pub fn collect_files(
    root: &Path,
    owners: &dyn OwnerResolver,
    tracker: &ProgressTracker,
) -> Result<Vec<FileRecord>, ScanError> {
    let mut files = Vec::with_capacity(usize::try_from(tracker.total()).unwrap_or(0));

    for entry in checked_entries(walker(root)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let metadata = fs::symlink_metadata(&path).map_err(|source| ScanError::Stat {
            path: path.clone(),
            source,
        })?;
        let owner = owners.owner_of(&path, &metadata);
        let record = FileRecord::from_metadata(root, path.clone(), &metadata, owner)
            .map_err(|source| ScanError::Stat { path, source })?;

        files.push(record);
        tracker.advance();
    }

    Ok(files)
}
