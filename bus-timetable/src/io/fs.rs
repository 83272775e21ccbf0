//! File-system backed implementations of the I/O capabilities.

use std::io;
use std::path::Path;

use super::reader::FileRead;
use super::writer::FileWrite;

/// Reads and writes files on the local file system via tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileRead for LocalFs {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

impl FileWrite for LocalFs {
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
