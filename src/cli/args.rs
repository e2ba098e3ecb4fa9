//! Command-line argument parsing.
//!
//! ```text
//! sidediff [OPTIONS] [FILE_A] [FILE_B]
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Options for an interactive run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Parser)]
#[command(
    name = "sidediff",
    version,
    about = "Compare two texts side by side in the terminal",
    after_help = "Environment:\n  SIDEDIFF_LOG  Log filter (default: info), written to ~/.sidediff/logs/sidediff.log"
)]
pub struct RunOptions {
    /// Read settings from PATH instead of ~/.sidediff/config.json
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File loaded into Text A at startup
    #[arg(value_name = "FILE_A")]
    pub file_a: Option<PathBuf>,

    /// File loaded into Text B at startup
    #[arg(value_name = "FILE_B")]
    pub file_b: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage; holds the rendered help text
    Help(String),
    /// Run the TUI (default)
    Run(RunOptions),
    /// The arguments could not be parsed
    Invalid(clap::Error),
}

/// Parse command-line arguments. The first item is the program name.
///
/// # Arguments
///
/// * `args` - The full argument list, usually `std::env::args()`
///
/// ```
/// use sidediff::cli::args::{parse_args, CliCommand};
///
/// assert!(matches!(parse_args(["sidediff", "--version"]), CliCommand::Version));
/// assert!(matches!(parse_args(["sidediff", "a.txt"]), CliCommand::Run(_)));
/// ```
pub fn parse_args<I, T>(args: I) -> CliCommand
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match RunOptions::try_parse_from(args) {
        Ok(options) => CliCommand::Run(options),
        Err(err) => match err.kind() {
            ErrorKind::DisplayVersion => CliCommand::Version,
            ErrorKind::DisplayHelp => CliCommand::Help(err.render().to_string()),
            _ => CliCommand::Invalid(err),
        },
    }
}
