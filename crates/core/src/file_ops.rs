use crate::copier::copy_file;
use crate::error::FileError;
use crate::probe::file_exists;
use std::io;
use std::path::Path;

/// Filesystem operations the replacement protocol performs against the
/// target and its backup. Every method defaults to the host filesystem.
pub trait FileOps {
    fn exists(&self, path: &Path) -> Result<bool, FileError> {
        file_exists(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), FileError> {
        copy_file(from, to)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    /// Must be an atomic rename, never a copy fallback.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HostFileOps;

impl FileOps for HostFileOps {}
