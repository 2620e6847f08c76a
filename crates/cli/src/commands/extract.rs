use clap::Args;
use safe_replace_installer::extract_archive;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct ExtractArgs {
    #[arg(required = true, help = "Archive to unpack")]
    pub archive: PathBuf,

    #[arg(required = true, help = "Directory to unpack into")]
    pub dest: PathBuf,
}

pub fn extract(args: ExtractArgs) -> miette::Result<()> {
    extract_archive(&args.archive, &args.dest)
}
