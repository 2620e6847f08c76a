use crate::error::ReplaceError;
use crate::file_ops::FileOps;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Sibling path a backup of `target` is written to, `<dir>/<name>-backup`.
pub fn backup_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();

    name.push("-backup");

    target.with_file_name(name)
}

/// A copy of the target's content taken before it is removed. There is
/// deliberately no `Drop` cleanup, as the file must survive for manual
/// recovery when a rollback fails.
#[derive(Debug)]
pub struct Backup {
    pub target: PathBuf,
    pub path: PathBuf,
}

impl Backup {
    /// Copy `target` to its backup path. An existing file at that path is
    /// never overwritten.
    pub fn create(ops: &impl FileOps, target: &Path) -> Result<Self, ReplaceError> {
        let path = backup_path_for(target);

        if ops.exists(&path)? {
            return Err(ReplaceError::BackupExists {
                target: target.to_path_buf(),
                backup: path,
            });
        }

        if let Err(error) = ops.copy(target, &path) {
            // A partial copy can't be restored from
            if let Err(remove_error) = ops.remove(&path) {
                warn!(
                    backup = ?path,
                    error = %remove_error,
                    "Failed to remove partial backup file"
                );
            }

            return Err(ReplaceError::BackupFailed {
                target: target.to_path_buf(),
                backup: path,
                error: Box::new(error),
            });
        }

        debug!(target = ?target, backup = ?path, "Created backup");

        Ok(Self {
            target: target.to_path_buf(),
            path,
        })
    }

    /// Delete the backup. Failures are logged and otherwise ignored.
    pub fn remove(self, ops: &impl FileOps) -> bool {
        match ops.remove(&self.path) {
            Ok(()) => {
                debug!(backup = ?self.path, "Removed backup");

                true
            }
            Err(error) => {
                warn!(
                    backup = ?self.path,
                    error = %error,
                    "Failed to remove backup file"
                );

                false
            }
        }
    }

    /// Rename the backup back onto its target.
    pub fn restore(&self, ops: &impl FileOps) -> io::Result<()> {
        ops.rename(&self.path, &self.target)?;

        debug!(target = ?self.target, backup = ?self.path, "Restored backup");

        Ok(())
    }
}
