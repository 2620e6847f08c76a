use clap::Args;
use safe_replace_core::safe_replace;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct ReplaceArgs {
    #[arg(required = true, help = "File containing the new content")]
    pub source: PathBuf,

    #[arg(required = true, help = "File to replace")]
    pub target: PathBuf,

    #[arg(
        long,
        short,
        env = "SAFE_REPLACE_VERBOSE",
        help = "Print progress while replacing"
    )]
    pub verbose: bool,
}

pub fn replace(args: ReplaceArgs) -> miette::Result<()> {
    safe_replace(&args.source, &args.target, args.verbose)?;

    Ok(())
}
