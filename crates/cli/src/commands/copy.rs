use clap::Args;
use safe_replace_core::copy_file;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Clone, Debug, Default)]
pub struct CopyArgs {
    #[arg(required = true, help = "File to copy from")]
    pub from: PathBuf,

    #[arg(required = true, help = "File to copy to")]
    pub to: PathBuf,
}

pub fn copy(args: CopyArgs) -> miette::Result<()> {
    copy_file(&args.from, &args.to)?;

    debug!(from = ?args.from, to = ?args.to, "Copied file");

    Ok(())
}
