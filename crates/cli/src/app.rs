use crate::commands::{
    AbsoluteArgs, CopyArgs, ExistsArgs, ExtractArgs, ReplaceArgs, UpdateArgs, WritableArgs,
};
use clap::builder::styling::{Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use starbase_styles::color::Color as ColorType;
use std::fmt::{Display, Error, Formatter};

#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "{}",
            match self {
                LogLevel::Off => "off",
                LogLevel::Error => "error",
                LogLevel::Warn => "warn",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            }
        )?;

        Ok(())
    }
}

fn fg(ty: ColorType) -> Style {
    Style::new().fg_color(Some(Color::from(ty as u8)))
}

fn create_styles() -> Styles {
    Styles::default()
        .error(fg(ColorType::Red))
        .header(Style::new().bold())
        .invalid(fg(ColorType::Yellow))
        .literal(fg(ColorType::Pink)) // args, options, etc
        .placeholder(fg(ColorType::GrayLight))
        .usage(fg(ColorType::Purple).bold())
        .valid(fg(ColorType::Green))
}

#[derive(Debug, Parser)]
#[command(
    name = "safe-replace",
    version,
    about,
    long_about = None,
    disable_help_subcommand = true,
    propagate_version = true,
    next_line_help = false,
    styles = create_styles()
)]
pub struct App {
    #[arg(
        value_enum,
        long,
        global = true,
        env = "SAFE_REPLACE_LOG",
        help = "Lowest log level to output"
    )]
    pub log: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        name = "absolute",
        about = "Display the absolute path of a file.",
        long_about = "Display the absolute, cleaned path of a file. Symlinks are not followed."
    )]
    Absolute(AbsoluteArgs),

    #[command(
        name = "copy",
        about = "Copy a file and its permissions.",
        long_about = "Copy a file and its permissions. The destination is written in place and is not atomic."
    )]
    Copy(CopyArgs),

    #[command(
        name = "current-exe",
        about = "Display the real path of this executable."
    )]
    CurrentExe,

    #[command(name = "exists", about = "Check whether a file exists.")]
    Exists(ExistsArgs),

    #[command(
        name = "extract",
        about = "Unpack an archive into a directory.",
        long_about = "Unpack an archive into a directory. The archive format is detected from its extension."
    )]
    Extract(ExtractArgs),

    #[command(
        alias = "mv",
        name = "replace",
        about = "Safely replace a file with another.",
        long_about = "Move a file over another, backing up the original first and restoring it if the move fails."
    )]
    Replace(ReplaceArgs),

    #[command(
        name = "update",
        about = "Replace a binary with one from a release archive.",
        long_about = "Unpack a release archive next to the target binary and safely swap the binary in.\nDefaults to updating this executable."
    )]
    Update(UpdateArgs),

    #[command(
        name = "writable",
        about = "Check whether the current user can write to a file."
    )]
    Writable(WritableArgs),
}
