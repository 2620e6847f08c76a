mod app;
mod commands;

use app::{App as CLI, Commands};
use clap::Parser;
use starbase::tracing::{setup_tracing, TracingOptions};
use starbase_utils::string_vec;
use std::env;
use tracing::{debug, metadata::LevelFilter};

fn main() -> miette::Result<()> {
    let cli = CLI::parse();

    if let Some(level) = &cli.log {
        env::set_var("SAFE_REPLACE_LOG", level.to_string());
    }

    let _guard = setup_tracing(TracingOptions {
        default_level: LevelFilter::WARN,
        filter_modules: string_vec![
            "safe_replace",
            "safe_replace_cli",
            "safe_replace_core",
            "safe_replace_installer",
            "starbase"
        ],
        log_env: "SAFE_REPLACE_LOG".into(),
        test_env: "SAFE_REPLACE_TEST".into(),
        ..TracingOptions::default()
    });

    debug!(
        args = ?env::args().collect::<Vec<_>>(),
        "Running safe-replace v{}",
        env!("CARGO_PKG_VERSION")
    );

    match cli.command {
        Commands::Absolute(args) => commands::absolute(args),
        Commands::Copy(args) => commands::copy(args),
        Commands::CurrentExe => commands::current_exe(),
        Commands::Exists(args) => commands::exists(args),
        Commands::Extract(args) => commands::extract(args),
        Commands::Replace(args) => commands::replace(args),
        Commands::Update(args) => commands::update(args),
        Commands::Writable(args) => commands::writable(args),
    }
}
