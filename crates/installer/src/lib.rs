mod error;

use safe_replace_core::{
    current_exe_path, file_exists, has_write_permission, resolve_target_path, safe_replace,
};
use starbase_archive::Archiver;
use starbase_utils::fs;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace, warn};

pub use error::InstallerError;

/// Unpack `archive_file` into `dest_dir`. The format is detected from the
/// file extension.
#[instrument]
pub fn extract_archive(
    archive_file: impl AsRef<Path> + Debug,
    dest_dir: impl AsRef<Path> + Debug,
) -> miette::Result<()> {
    let archive_file = archive_file.as_ref();
    let dest_dir = dest_dir.as_ref();

    trace!(
        source = ?archive_file,
        target = ?dest_dir,
        "Unpacking archive"
    );

    fs::create_dir_all(dest_dir)?;

    Archiver::new(dest_dir, archive_file).unpack_from_ext()?;

    Ok(())
}

/// Directory the archive is unpacked into before the swap. It lives next to
/// the target so the final rename never crosses a volume.
pub fn staging_dir_for(target: &Path, bin_name: &str) -> PathBuf {
    target.with_file_name(format!(".{bin_name}-update"))
}

// Release archives either contain the binary at the root, or wrapped
// in a single folder (`app-x86_64-unknown-linux-gnu/app`).
fn find_binary(staging_dir: &Path, bin_name: &str) -> miette::Result<Option<PathBuf>> {
    let direct = staging_dir.join(bin_name);

    if direct.is_file() {
        return Ok(Some(direct));
    }

    for entry in fs::read_dir(staging_dir)? {
        let nested = entry.path().join(bin_name);

        if nested.is_file() {
            return Ok(Some(nested));
        }
    }

    Ok(None)
}

/// Replace `target` with the `bin_name` file from `archive_file`. The target
/// may not exist yet. Replacement failures are [`safe_replace_core::ReplaceError`]s
/// and can be downcast from the returned report.
#[instrument]
pub fn update_from_archive(
    archive_file: impl AsRef<Path> + Debug,
    target: impl AsRef<Path> + Debug,
    bin_name: &str,
    verbose: bool,
) -> miette::Result<PathBuf> {
    let archive_file = archive_file.as_ref();
    let target = resolve_target_path(target.as_ref())?;

    if file_exists(&target)? && !has_write_permission(&target)? {
        return Err(InstallerError::NotWritable { path: target }.into());
    }

    let staging_dir = staging_dir_for(&target, bin_name);

    // Leftovers from an interrupted update
    if staging_dir.exists() {
        fs::remove_dir_all(&staging_dir)?;
    }

    debug!(
        archive = ?archive_file,
        staging_dir = ?staging_dir,
        "Staging update next to target"
    );

    let result = extract_archive(archive_file, &staging_dir).and_then(|_| {
        let binary =
            find_binary(&staging_dir, bin_name)?.ok_or_else(|| InstallerError::MissingBinary {
                archive: archive_file.to_path_buf(),
                bin: bin_name.to_owned(),
            })?;

        safe_replace(&binary, &target, verbose)?;

        Ok(target.clone())
    });

    if result.is_ok() {
        fs::remove_dir_all(&staging_dir)?;
    } else if let Err(error) = fs::remove_dir_all(&staging_dir) {
        warn!(
            staging_dir = ?staging_dir,
            error = %error,
            "Failed to clean up staging directory"
        );
    }

    result
}

/// Replace the running executable with the binary of the same name from
/// `archive_file`.
#[instrument]
pub fn update_current_exe(
    archive_file: impl AsRef<Path> + Debug,
    verbose: bool,
) -> miette::Result<PathBuf> {
    let current = current_exe_path()?;
    let bin_name = current
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    update_from_archive(archive_file, &current, &bin_name, verbose)
}
