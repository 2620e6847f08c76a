use clap::Args;
use safe_replace_core::file_exists;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct ExistsArgs {
    #[arg(required = true, help = "Path to check")]
    pub path: PathBuf,
}

pub fn exists(args: ExistsArgs) -> miette::Result<()> {
    println!("{}", file_exists(&args.path)?);

    Ok(())
}
