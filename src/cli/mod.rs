//! Command-line interface.
//!
//! The dispatcher runs before the TUI starts. Flags that print something
//! (`--version`, `--help`) or fail to parse exit here; everything else
//! becomes [`RunOptions`] for the TUI.
//!
//! ```ignore
//! use sidediff::cli::{parse_args, run_cli_command};
//!
//! let options = run_cli_command(parse_args(std::env::args()));
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if it is not a TUI run.
///
/// Returns the run options for [`CliCommand::Run`]. Every other command
/// prints its output and exits the process; parse errors exit with clap's
/// usage status.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Run(options) => options,
        CliCommand::Version => handle_version_command(),
        CliCommand::Help(text) => {
            print!("{}", text);
            std::process::exit(0)
        }
        CliCommand::Invalid(err) => err.exit(),
    }
}
