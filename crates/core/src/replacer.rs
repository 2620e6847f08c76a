use crate::backup::Backup;
use crate::error::ReplaceError;
use crate::file_ops::{FileOps, HostFileOps};
use crate::resolver::{resolve_path, resolve_target_path};
use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, instrument, trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplaceState {
    Resolving,
    CheckingTarget,
    BackingUp,
    TargetRemoved,
    Renamed,
    Committed,
    RolledBack,
    Unrecoverable,
}

/// A single run of the replacement protocol, moving `source` over `target`.
///
/// At any point during the run, either the original content is available
/// (at the target, or in the backup), or the new content is at the target.
///
/// Only one operation may be in flight per target path. Nothing here
/// locks, so concurrent runs against the same target interleave
/// unpredictably; callers that need this must serialize around the whole
/// operation.
#[derive(Debug)]
pub struct ReplaceOperation<F: FileOps = HostFileOps> {
    pub source: PathBuf,
    pub target: PathBuf,
    pub target_existed: bool,
    pub verbose: bool,

    backup: Option<Backup>,
    ops: F,
    state: ReplaceState,
}

impl ReplaceOperation<HostFileOps> {
    pub fn new(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        Self::with_ops(source, target, HostFileOps)
    }
}

impl<F: FileOps> ReplaceOperation<F> {
    pub fn with_ops(source: impl AsRef<Path>, target: impl AsRef<Path>, ops: F) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            target: target.as_ref().to_path_buf(),
            target_existed: false,
            verbose: false,
            backup: None,
            ops,
            state: ReplaceState::Resolving,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn state(&self) -> ReplaceState {
        self.state
    }

    /// The backup still owned by this operation. Only present after an
    /// unrecoverable failure, where it was left on disk.
    pub fn backup(&self) -> Option<&Backup> {
        self.backup.as_ref()
    }

    /// Run the protocol to completion. Once the target has been removed,
    /// this always ends committed, rolled back, or unrecoverable.
    #[instrument(skip(self), fields(source = ?self.source, target = ?self.target))]
    pub fn run(&mut self) -> Result<(), ReplaceError> {
        self.transition(ReplaceState::Resolving);

        self.source = resolve_path(&self.source)?;
        self.target = resolve_target_path(&self.target)?;

        self.transition(ReplaceState::CheckingTarget);

        self.target_existed = self.ops.exists(&self.target)?;

        if self.target_existed {
            self.transition(ReplaceState::BackingUp);
            self.report(format_args!(
                "Creating backup of existing file ({})",
                self.target.display()
            ));

            let backup = Backup::create(&self.ops, &self.target)?;

            if let Err(error) = self.ops.remove(&self.target) {
                // Target is untouched, so the backup is no longer needed
                backup.remove(&self.ops);

                return Err(ReplaceError::RemoveFailed {
                    path: self.target.clone(),
                    error: Box::new(error),
                });
            }

            self.backup = Some(backup);
            self.transition(ReplaceState::TargetRemoved);
        }

        match self.ops.rename(&self.source, &self.target) {
            Ok(()) => {
                self.commit();

                Ok(())
            }
            Err(error) => Err(self.rollback(error)),
        }
    }

    fn commit(&mut self) {
        self.transition(ReplaceState::Renamed);

        if let Some(backup) = self.backup.take() {
            self.report("Removing backup file");

            backup.remove(&self.ops);
        }

        self.transition(ReplaceState::Committed);
        self.report("Move successful");

        debug!(target = ?self.target, "Replaced file");
    }

    fn rollback(&mut self, rename_error: io::Error) -> ReplaceError {
        let Some(backup) = self.backup.take() else {
            // Target was never touched, nothing to restore
            return self.rename_failed(rename_error);
        };

        self.report("Failed to move updated file, restoring from backup");

        if let Err(restore_error) = backup.restore(&self.ops) {
            self.transition(ReplaceState::Unrecoverable);

            error!(
                backup = ?backup.path,
                target = ?backup.target,
                error = %restore_error,
                "Unable to restore original file from backup"
            );

            let failure = ReplaceError::Unrecoverable {
                backup: backup.path.clone(),
                target: backup.target.clone(),
                rename_error: Box::new(rename_error),
                error: Box::new(restore_error),
            };

            // Printed regardless of verbosity
            if let Some(instructions) = failure.recovery_instructions() {
                println!("\n{instructions}\n");
            }

            // Left on disk for the operator
            self.backup = Some(backup);

            return failure;
        }

        self.transition(ReplaceState::RolledBack);

        warn!(target = ?self.target, "Rolled back replacement");

        self.rename_failed(rename_error)
    }

    fn rename_failed(&self, error: io::Error) -> ReplaceError {
        ReplaceError::RenameFailed {
            from: self.source.clone(),
            to: self.target.clone(),
            error: Box::new(error),
        }
    }

    fn transition(&mut self, state: ReplaceState) {
        trace!(from = ?self.state, to = ?state, "Replacement state changed");

        self.state = state;
    }

    fn report(&self, message: impl Display) {
        if self.verbose {
            println!("> {message}");
        }
    }
}

/// Replace `target` with `source` using [`ReplaceOperation`]. `verbose`
/// prints progress lines and has no other effect.
///
/// Only one replacement may be in flight for a given target at a time.
pub fn safe_replace(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    verbose: bool,
) -> Result<(), ReplaceError> {
    ReplaceOperation::new(source, target).verbose(verbose).run()
}
