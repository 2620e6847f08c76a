use clap::Args;
use safe_replace_core::current_exe_path;
use safe_replace_installer::{update_current_exe, update_from_archive};
use starbase_styles::color;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Clone, Debug, Default)]
pub struct UpdateArgs {
    #[arg(required = true, help = "Release archive containing the new binary")]
    pub archive: PathBuf,

    #[arg(long, help = "Binary to replace, defaults to this executable")]
    pub target: Option<PathBuf>,

    #[arg(
        long,
        help = "Name of the binary within the archive, defaults to the target's file name"
    )]
    pub bin: Option<String>,

    #[arg(
        long,
        short,
        env = "SAFE_REPLACE_VERBOSE",
        help = "Print progress while replacing"
    )]
    pub verbose: bool,
}

pub fn update(args: UpdateArgs) -> miette::Result<()> {
    let updated = match &args.target {
        Some(target) => {
            let bin_name = args.bin.clone().unwrap_or_else(|| {
                target
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });

            debug!(target = ?target, bin = bin_name.as_str(), "Updating binary");

            update_from_archive(&args.archive, target, &bin_name, args.verbose)?
        }
        None => match &args.bin {
            Some(bin_name) => {
                update_from_archive(&args.archive, current_exe_path()?, bin_name, args.verbose)?
            }
            None => update_current_exe(&args.archive, args.verbose)?,
        },
    };

    println!("Updated {}", color::path(updated));

    Ok(())
}
