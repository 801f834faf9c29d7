//! Loose-file directory provider.
//!
//! Serves an unpacked asset tree straight from the file system, so
//! development builds can stream the same paths that ship inside a
//! [`Pack`](crate::Pack) later. Resources are plain files; the operating
//! system tracks their cursors.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use satchel_stream::{AssetResource, AssetSource};

use crate::{PackError, Result};

/// Directory-backed asset source.
#[derive(Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Serve assets from the tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// [`PackError::NotADirectory`] if `root` does not name a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(PackError::NotADirectory(root.display().to_string()));
        }
        debug!(root = %root.display(), "serving loose assets");
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The served root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check whether `path` stays inside the served tree.
    ///
    /// Asset paths are relative by contract; anything absolute or
    /// climbing through `..` is refused rather than resolved.
    fn is_contained(path: &Path) -> bool {
        path.components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}

impl AssetSource for DirSource {
    type Resource = FileResource;

    fn open(&self, path: &str) -> Option<Self::Resource> {
        let relative = Path::new(path);
        if !Self::is_contained(relative) {
            trace!(%path, "refusing asset path that escapes the tree");
            return None;
        }

        let full = self.root.join(relative);
        if !full.is_file() {
            return None;
        }
        let file = File::open(&full).ok()?;
        trace!(path = %full.display(), "opened loose asset");
        Some(FileResource { file })
    }
}

/// One opened loose file.
#[derive(Debug)]
pub struct FileResource {
    file: File,
}

impl AssetResource for FileResource {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.file.read(buf).unwrap_or(0)
    }

    fn seek(&mut self, pos: SeekFrom) -> i64 {
        match self.file.seek(pos) {
            Ok(offset) => i64::try_from(offset).unwrap_or(i64::MAX),
            Err(_) => -1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tree() -> tempfile::TempDir {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir");
        std::fs::write(dir.path().join("images/logo.png"), vec![5u8; 40]).expect("write");
        std::fs::write(dir.path().join("notes.txt"), b"loose").expect("write");
        dir
    }

    #[test]
    fn non_directory_root_is_rejected() {
        let dir = tree();
        let file = dir.path().join("notes.txt");
        assert!(matches!(
            DirSource::new(&file),
            Err(PackError::NotADirectory(_))
        ));
    }

    #[test]
    fn opens_files_under_the_root() {
        let dir = tree();
        let source = DirSource::new(dir.path()).expect("source");

        let mut res = source.open("images/logo.png").expect("resource");
        let mut buf = [0u8; 64];
        assert_eq!(res.read(&mut buf), 40);

        assert!(source.open("missing.png").is_none());
        // Directories are not assets
        assert!(source.open("images").is_none());
    }

    #[test]
    fn traversal_is_refused() {
        let dir = tree();
        let nested = dir.path().join("images");
        let source = DirSource::new(&nested).expect("source");

        assert!(source.open("../notes.txt").is_none());
        assert!(source.open("/etc/hostname").is_none());
    }

    #[test]
    fn seeks_behave_like_the_boundary_demands() {
        let dir = tree();
        let source = DirSource::new(dir.path()).expect("source");
        let mut res = source.open("notes.txt").expect("resource");

        assert_eq!(res.seek(SeekFrom::End(0)), 5);
        assert_eq!(res.seek(SeekFrom::Current(-2)), 3);
        assert_eq!(res.seek(SeekFrom::Current(-10)), -1);
        // Failed seek leaves the position unchanged
        assert_eq!(res.seek(SeekFrom::Current(0)), 3);
    }
}
