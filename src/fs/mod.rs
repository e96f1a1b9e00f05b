//! Filesystem gateway.
//!
//! Every filesystem touch made by a command goes through [`Gateway`]. The
//! gateway does no policy work of its own: it performs the primitive call
//! and folds whatever went wrong into a single [`FsError`].

mod local;

pub use local::{LocalFs, DEFAULT_COMPRESSION_LEVEL};

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result of a `stat` call. A missing path is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub exists: bool,
    pub is_dir: bool,
}

impl Stat {
    pub fn missing() -> Self {
        Self {
            exists: false,
            is_dir: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    AlreadyExists,
    PermissionDenied,
    NotADirectory,
    IsADirectory,
    CrossDevice,
    Other,
}

/// The one error shape the gateway surfaces.
#[derive(Debug)]
pub struct FsError {
    pub op: &'static str,
    pub path: PathBuf,
    pub kind: FsErrorKind,
    pub detail: String,
}

impl FsError {
    pub fn new(op: &'static str, path: &Path, kind: FsErrorKind, detail: impl Into<String>) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            kind,
            detail: detail.into(),
        }
    }

    pub fn from_io(op: &'static str, path: &Path, err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => FsErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => FsErrorKind::AlreadyExists,
            io::ErrorKind::PermissionDenied => FsErrorKind::PermissionDenied,
            _ if is_cross_device(&err) => FsErrorKind::CrossDevice,
            _ => FsErrorKind::Other,
        };
        Self::new(op, path, kind, err.to_string())
    }
}

#[cfg(unix)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EXDEV)
}

#[cfg(not(unix))]
fn is_cross_device(_err: &io::Error) -> bool {
    false
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            FsErrorKind::NotFound => "no such file or directory",
            FsErrorKind::AlreadyExists => "already exists",
            FsErrorKind::PermissionDenied => "permission denied",
            FsErrorKind::NotADirectory => "not a directory",
            FsErrorKind::IsADirectory => "is a directory",
            FsErrorKind::CrossDevice => "crosses a device boundary",
            FsErrorKind::Other => self.detail.as_str(),
        };
        write!(f, "{} '{}': {}", self.op, self.path.display(), reason)
    }
}

impl std::error::Error for FsError {}

/// Primitive filesystem operations consumed by the command router.
///
/// Stream operations (`copy_stream`, `compress_stream`, `decompress_stream`)
/// run to completion before returning and never overwrite an existing
/// destination. They return the number of bytes written.
pub trait Gateway {
    fn stat(&self, path: &Path) -> Result<Stat, FsError>;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError>;
    /// Creates an empty file. Fails if anything already exists at `path`.
    fn create_file(&self, path: &Path) -> Result<(), FsError>;
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError>;
    fn copy_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError>;
    fn delete_file(&self, path: &Path) -> Result<(), FsError>;
    /// Lowercase hex SHA-256 of the file contents.
    fn digest(&self, path: &Path) -> Result<String, FsError>;
    fn compress_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError>;
    fn decompress_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError>;
    fn list_directory(&self, path: &Path) -> Result<Vec<DirEntry>, FsError>;
    /// Validates `path` as a directory and returns its canonical form.
    /// Process state is left alone; the caller owns the working directory.
    fn change_directory(&self, path: &Path) -> Result<PathBuf, FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_kinds() {
        let path = Path::new("/nope");
        let err = FsError::from_io("read", path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind, FsErrorKind::NotFound);

        let err = FsError::from_io("add", path, io::Error::from(io::ErrorKind::AlreadyExists));
        assert_eq!(err.kind, FsErrorKind::AlreadyExists);
        assert_eq!(err.to_string(), "add '/nope': already exists");
    }

    #[cfg(unix)]
    #[test]
    fn test_from_io_detects_cross_device() {
        let err = FsError::from_io(
            "move",
            Path::new("/a"),
            io::Error::from_raw_os_error(libc::EXDEV),
        );
        assert_eq!(err.kind, FsErrorKind::CrossDevice);
    }

    #[test]
    fn test_other_kind_keeps_detail() {
        let err = FsError::new("read", Path::new("x"), FsErrorKind::Other, "disk on fire");
        assert_eq!(err.to_string(), "read 'x': disk on fire");
    }
}
