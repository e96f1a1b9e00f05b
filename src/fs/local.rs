use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::{DirEntry, EntryKind, FsError, FsErrorKind, Gateway, Stat};

const STREAM_BUFFER: usize = 64 * 1024;
const BROTLI_WINDOW: u32 = 22;
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 11;

/// [`Gateway`] over the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFs {
    compression_level: u32,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFs {
    pub fn new() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(11);
        self
    }

    /// Opens `from`, creates `to` exclusively, and runs `pump` between them.
    /// A failed pump removes the half-written destination.
    fn stream_into<F>(&self, op: &'static str, from: &Path, to: &Path, pump: F) -> Result<u64, FsError>
    where
        F: FnOnce(BufReader<File>, BufWriter<File>) -> io::Result<()>,
    {
        let input = File::open(from).map_err(|e| FsError::from_io(op, from, e))?;
        let output = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(to)
            .map_err(|e| FsError::from_io(op, to, e))?;

        let reader = BufReader::with_capacity(STREAM_BUFFER, input);
        let writer = BufWriter::with_capacity(STREAM_BUFFER, output);

        if let Err(e) = pump(reader, writer) {
            if let Err(cleanup) = fs::remove_file(to) {
                tracing::warn!(path = %to.display(), error = %cleanup, "could not remove partial output");
            }
            return Err(FsError::from_io(op, from, e));
        }

        fs::metadata(to)
            .map(|m| m.len())
            .map_err(|e| FsError::from_io(op, to, e))
    }
}

impl Gateway for LocalFs {
    fn stat(&self, path: &Path) -> Result<Stat, FsError> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Stat {
                exists: true,
                is_dir: meta.is_dir(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Stat::missing()),
            Err(e) => Err(FsError::from_io("stat", path, e)),
        }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        fs::read(path).map_err(|e| FsError::from_io("read", path, e))
    }

    fn create_file(&self, path: &Path) -> Result<(), FsError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| FsError::from_io("create", path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        fs::rename(from, to).map_err(|e| FsError::from_io("rename", from, e))
    }

    fn copy_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
        self.stream_into("copy", from, to, |mut reader, mut writer| {
            io::copy(&mut reader, &mut writer)?;
            writer.flush()
        })
    }

    fn delete_file(&self, path: &Path) -> Result<(), FsError> {
        fs::remove_file(path).map_err(|e| FsError::from_io("delete", path, e))
    }

    fn digest(&self, path: &Path) -> Result<String, FsError> {
        let file = File::open(path).map_err(|e| FsError::from_io("hash", path, e))?;
        let mut reader = BufReader::with_capacity(STREAM_BUFFER, file);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher).map_err(|e| FsError::from_io("hash", path, e))?;
        Ok(hex::encode(hasher.finalize()))
    }

    fn compress_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
        let level = self.compression_level;
        self.stream_into("compress", from, to, |mut reader, writer| {
            let mut encoder = brotli::CompressorWriter::new(writer, STREAM_BUFFER, level, BROTLI_WINDOW);
            io::copy(&mut reader, &mut encoder)?;
            encoder.flush()?;
            encoder.into_inner().flush()
        })
    }

    fn decompress_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
        self.stream_into("decompress", from, to, |reader, mut writer| {
            let mut decoder = brotli::Decompressor::new(reader, STREAM_BUFFER);
            io::copy(&mut decoder, &mut writer)?;
            writer.flush()
        })
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<DirEntry>, FsError> {
        let entries = fs::read_dir(path).map_err(|e| FsError::from_io("list", path, e))?;

        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io("list", path, e))?;
            // Follow symlinks so a link to a directory is listed as one.
            let kind = match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            };
            listed.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(listed)
    }

    fn change_directory(&self, path: &Path) -> Result<PathBuf, FsError> {
        let resolved = fs::canonicalize(path).map_err(|e| FsError::from_io("cd", path, e))?;
        let meta = fs::metadata(&resolved).map_err(|e| FsError::from_io("cd", path, e))?;
        if !meta.is_dir() {
            return Err(FsError::new("cd", path, FsErrorKind::NotADirectory, "not a directory"));
        }
        Ok(resolved)
    }
}
