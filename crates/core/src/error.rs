use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use starbase_utils::fs::FsError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FileError {
    #[error(transparent)]
    Fs(#[from] Box<FsError>),

    #[diagnostic(code(safe_replace::fs::access_failed))]
    #[error("Failed to check write access for {}.", .path.style(Style::Path))]
    Access {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::fs::copy_failed))]
    #[error("Failed to copy {} to {}.", .from.style(Style::Path), .to.style(Style::Path))]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::fs::current_exe))]
    #[error("Unable to determine the location of the current executable.")]
    CurrentExe {
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::fs::not_found))]
    #[error(
        "Unable to resolve {}, the file or a link in its chain does not exist.",
        .path.style(Style::Path)
    )]
    NotFound {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::fs::perms_failed))]
    #[error("Failed to update permissions for {}.", .path.style(Style::Path))]
    Perms {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::fs::resolve_failed))]
    #[error("Failed to resolve the real location of {}.", .path.style(Style::Path))]
    Resolve {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::fs::stat_failed))]
    #[error("Failed to read metadata for {}.", .path.style(Style::Path))]
    Stat {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },
}

impl From<FsError> for FileError {
    fn from(e: FsError) -> FileError {
        FileError::Fs(Box::new(e))
    }
}

impl FileError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum ReplaceError {
    #[error(transparent)]
    File(#[from] FileError),

    #[diagnostic(
        code(safe_replace::backup_failed),
        help("The target file was not modified.")
    )]
    #[error(
        "Failed to back up {} to {}, aborting replacement.",
        .target.style(Style::Path),
        .backup.style(Style::Path),
    )]
    BackupFailed {
        target: PathBuf,
        backup: PathBuf,
        #[source]
        error: Box<FileError>,
    },

    #[diagnostic(
        code(safe_replace::backup_exists),
        help("Move or delete the existing file, it may be the recovery copy of an earlier failed replacement.")
    )]
    #[error(
        "Unable to back up {}, {} already exists.",
        .target.style(Style::Path),
        .backup.style(Style::Path),
    )]
    BackupExists { target: PathBuf, backup: PathBuf },

    #[diagnostic(
        code(safe_replace::remove_failed),
        help("The target file was not modified.")
    )]
    #[error("Failed to remove {} before replacing it.", .path.style(Style::Path))]
    RemoveFailed {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(safe_replace::rename_failed))]
    #[error("Failed to move {} to {}.", .from.style(Style::Path), .to.style(Style::Path))]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(
        code(safe_replace::unrecoverable),
        help("The original file must be restored manually.")
    )]
    #[error(
        "Failed to replace {} ({}), and the original file could not be restored.\nMove {} to {} to recover it.",
        .target.style(Style::Path),
        .rename_error,
        .backup.style(Style::Path),
        .target.style(Style::Path),
    )]
    Unrecoverable {
        backup: PathBuf,
        target: PathBuf,
        rename_error: Box<io::Error>,
        #[source]
        error: Box<io::Error>,
    },
}

impl ReplaceError {
    /// Neither the original nor the new content is at the target path,
    /// and an operator has to move the backup back by hand.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, Self::Unrecoverable { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::File(error) if error.is_not_found())
    }

    /// Location of the backup file that was left behind, if any.
    pub fn backup_path(&self) -> Option<&Path> {
        match self {
            Self::Unrecoverable { backup, .. } => Some(backup),
            _ => None,
        }
    }

    /// What an operator must do by hand to get the original file back.
    pub fn recovery_instructions(&self) -> Option<String> {
        match self {
            Self::Unrecoverable { backup, target, .. } => Some(format!(
                "Unable to restore original file\nKindly move {} to {}",
                backup.display(),
                target.display()
            )),
            _ => None,
        }
    }
}
