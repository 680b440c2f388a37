use crate::config::ScanConfig;
use crate::error::{LocStringsError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every non-directory entry below a root, depth first.
///
/// Entries inside each directory are visited in file-name order, so two runs
/// over an unchanged tree produce the same sequence. Paths are the root as
/// given joined with each entry name. The root is not cleaned, so a root such
/// as `App.swift/..` keeps its `.swift` component in every listed path and
/// classification sees it.
pub struct FileWalker {
    follow_links: bool,
}

impl FileWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            follow_links: config.follow_links,
        }
    }

    pub fn walk<P: AsRef<Path>>(&self, root: P) -> Result<Vec<PathBuf>> {
        let root_path = root.as_ref();

        if !root_path.exists() {
            return Err(LocStringsError::InvalidPath {
                path: root_path.display().to_string(),
            });
        }

        if !root_path.is_dir() {
            return Err(LocStringsError::InvalidPath {
                path: format!("{} is not a directory", root_path.display()),
            });
        }

        let walker = WalkDir::new(root_path)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        let mut paths = Vec::new();

        for entry in walker {
            // A single unreadable directory aborts the whole listing
            let entry = entry.map_err(|err| LocStringsError::DirectoryRead {
                path: err
                    .path()
                    .unwrap_or(root_path)
                    .display()
                    .to_string(),
                source: err,
            })?;

            if !entry.file_type().is_dir() {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }
}
