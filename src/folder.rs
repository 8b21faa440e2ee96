//! Folder sizes: a recursive walk summing the lengths of all files below a folder.
//!
//! Unreadable entries are logged, not raised, and add nothing to the sum. Only the
//! failing entry is skipped: the rest of its folder and its siblings still count,
//! so a partially readable tree yields a partial sum rather than zero.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::warn;
use walkdir::WalkDir;

/// Total size in bytes of every file below `folder`, recursively.
///
/// Symbolic links are not followed.
pub fn total_size(folder: &Path) -> u64 {
    let mut size = 0;

    for entry in WalkDir::new(folder) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", folder.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        size += match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                warn!("cannot stat {}: {}", entry.path().display(), e);
                0
            }
        };
    }

    size
}

/// The readable sub-folders of `folder`, sorted by path.
pub fn subfolders(folder: &Path) -> Vec<PathBuf> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => folders.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => warn!("cannot list {}: {}", folder.display(), e),
        }
    }

    folders.sort();
    folders
}

/// What the browser shows for one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub path: PathBuf,
    pub size: u64,
    pub parent: Option<PathBuf>,
    pub subfolders: Vec<PathBuf>,
}

impl FolderReport {
    /// Fails only if `path` does not exist or is not a folder.
    pub fn new(path: &Path) -> io::Result<Self> {
        let path = fs::canonicalize(path)?;

        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a folder", path.display()),
            ));
        }

        Ok(Self {
            size: total_size(&path),
            parent: path.parent().map(Path::to_path_buf),
            subfolders: subfolders(&path),
            path,
        })
    }

    /// The report for the folder one level up, if there is one.
    pub fn up(&self) -> Option<io::Result<Self>> {
        let parent = self.parent.as_ref()?;
        Some(Self::new(parent))
    }
}
