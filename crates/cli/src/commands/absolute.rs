use clap::Args;
use safe_replace_core::absolute_path;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct AbsoluteArgs {
    #[arg(required = true, help = "Path to make absolute")]
    pub path: PathBuf,
}

pub fn absolute(args: AbsoluteArgs) -> miette::Result<()> {
    println!("{}", absolute_path(args.path).display());

    Ok(())
}
