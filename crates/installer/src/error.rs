use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InstallerError {
    #[diagnostic(code(safe_replace::installer::missing_binary))]
    #[error(
        "Unable to find binary {} in archive {}.",
        .bin.style(Style::File),
        .archive.style(Style::Path),
    )]
    MissingBinary { archive: PathBuf, bin: String },

    #[diagnostic(
        code(safe_replace::installer::not_writable),
        help("Re-run with elevated permissions, or update a copy you own.")
    )]
    #[error(
        "Unable to update {}, the current user cannot write to it.",
        .path.style(Style::Path)
    )]
    NotWritable { path: PathBuf },
}
