use clap::Args;
use safe_replace_core::has_write_permission;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct WritableArgs {
    #[arg(required = true, help = "File to check")]
    pub path: PathBuf,
}

pub fn writable(args: WritableArgs) -> miette::Result<()> {
    println!("{}", has_write_permission(&args.path)?);

    Ok(())
}
