//! Non-interactive command-line surface.
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use omnitool::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     // CLI command was executed, exit with result
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod convert;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use convert::{convert_file, handle_convert_command, handle_size_command};
pub use version::{version_line, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - a CLI command executed successfully
/// * `Some(Err(e))` - a CLI command failed
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    let mut stdout = std::io::stdout().lock();
    let result = match command {
        CliCommand::RunTui { .. } => return None,
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            Ok(())
        }
        CliCommand::Convert { path, format, out } => {
            handle_convert_command(path, *format, out.as_deref(), &mut stdout)
                .map_err(|e| eyre!(e.user_message()))
        }
        CliCommand::Size { bytes, decimals } => {
            handle_size_command(*bytes, *decimals, &mut stdout).map_err(|e| eyre!(e.user_message()))
        }
        CliCommand::Invalid(message) => Err(eyre!("{}\n\n{}", message, USAGE)),
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui { files: vec![] });
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_is_error() {
        let result = run_cli_command(&CliCommand::Invalid("bad".to_string()));
        assert!(matches!(result, Some(Err(_))));
    }
}
