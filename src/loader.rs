//! Loads whole files into memory so they can be decoded with [`BufferCursorReader`].
//!
//! This is the only part of the crate that touches the filesystem. Each load is a single
//! whole-file read: there are no retries, no partial reads and no streaming.

use crate::endian::Endianness;
use crate::reader::BufferCursorReader;
use std::io;
use std::path::{Path, PathBuf};

/// Reads the file at `path` into memory.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let result = std::fs::read(path);
    finish_load(path, result)
}

/// Reads the file at `path` into memory without blocking the async runtime.
#[cfg(feature = "tokio")]
pub async fn load_async(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let result = tokio::fs::read(path).await;
    finish_load(path, result)
}

fn finish_load(path: &Path, result: io::Result<Vec<u8>>) -> Result<Vec<u8>, LoadError> {
    match result {
        Ok(data) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("loaded {} byte(s) from {}", data.len(), path.display());
            Ok(data)
        }
        Err(source) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("failed to read {}: {}", path.display(), source);
            Err(LoadError {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// A file that has been read into memory, together with the path it came from.
#[derive(Clone, Debug)]
pub struct LoadedFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl LoadedFile {
    /// Reads the file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let data = load(&path)?;
        Ok(Self { path, data })
    }

    /// Reads the file at `path` without blocking the async runtime.
    #[cfg(feature = "tokio")]
    pub async fn open_async(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let data = load_async(&path).await?;
        Ok(Self { path, data })
    }

    /// Path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Contents of the file.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes `self` and returns the contents of the file.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Creates a little-endian reader over the contents, positioned at the start.
    pub fn reader(&self) -> BufferCursorReader<'_> {
        BufferCursorReader::new(&self.data)
    }

    /// Creates a reader with the given default byte order over the contents.
    pub fn reader_with(&self, endian: Endianness) -> BufferCursorReader<'_> {
        BufferCursorReader::with_endianness(&self.data, endian)
    }
}

/// Error returned when a file cannot be read into memory.
#[derive(Debug, thiserror::Error)]
#[error("failed to read the file: {source}")]
pub struct LoadError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl LoadError {
    /// Path that could not be read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// OS error code of the underlying I/O error, if it came from the operating system.
    pub fn code(&self) -> Option<i32> {
        self.source.raw_os_error()
    }

    /// Consumes `self` and returns the underlying I/O error.
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}
