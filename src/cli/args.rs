//! Command-line argument parsing.

use std::path::PathBuf;

use crate::encoding::PreviewFormat;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Encode a file and print or write the result
    Convert {
        path: PathBuf,
        format: PreviewFormat,
        out: Option<PathBuf>,
    },
    /// Format a byte count
    Size { bytes: u64, decimals: i32 },
    /// Run the TUI, optionally with files preloaded (default)
    RunTui { files: Vec<PathBuf> },
    /// Arguments could not be understood
    Invalid(String),
}

pub const USAGE: &str = "\
Usage:
  omnitool [FILE]...                          Start the TUI, loading FILEs into the converter
  omnitool convert <FILE> [--format <FMT>] [--out <PATH>]
                                              Encode FILE (hex, binary, python, c, base64; default hex)
  omnitool size <BYTES> [--decimals <N>]      Format a byte count
  omnitool --version | -V
  omnitool --help | -h

Environment:
  OMNITOOL_API_KEY (or GEMINI_API_KEY, API_KEY)   key for AI features
  OMNITOOL_MODEL, OMNITOOL_BASE_URL, OMNITOOL_TIMEOUT_SECS
  OMNITOOL_LOG, OMNITOOL_LOG_FILE                 log filter and destination";

/// Parse command-line arguments and return the command to execute.
///
/// # Examples
///
/// ```
/// use omnitool::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["omnitool".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    match args.first().map(String::as_str) {
        Some("convert") => parse_convert(&args[1..]),
        Some("size") => parse_size(&args[1..]),
        _ => parse_files(&args),
    }
}

fn parse_convert(args: &[String]) -> CliCommand {
    let mut path = None;
    let mut format = PreviewFormat::Hex;
    let mut out = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" | "-f" => match iter.next().map(|v| v.parse::<PreviewFormat>()) {
                Some(Ok(parsed)) => format = parsed,
                Some(Err(e)) => return CliCommand::Invalid(e.to_string()),
                None => return CliCommand::Invalid("--format needs a value".to_string()),
            },
            "--out" | "-o" => match iter.next() {
                Some(value) => out = Some(PathBuf::from(value)),
                None => return CliCommand::Invalid("--out needs a value".to_string()),
            },
            flag if flag.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option '{}'", flag))
            }
            value if path.is_none() => path = Some(PathBuf::from(value)),
            extra => return CliCommand::Invalid(format!("unexpected argument '{}'", extra)),
        }
    }

    match path {
        Some(path) => CliCommand::Convert { path, format, out },
        None => CliCommand::Invalid("convert needs a file".to_string()),
    }
}

fn parse_size(args: &[String]) -> CliCommand {
    let mut bytes = None;
    let mut decimals = 2;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--decimals" | "-d" => match iter.next().map(|v| v.parse::<i32>()) {
                Some(Ok(n)) => decimals = n,
                _ => return CliCommand::Invalid("--decimals needs an integer".to_string()),
            },
            value if bytes.is_none() => match value.parse::<u64>() {
                Ok(n) => bytes = Some(n),
                Err(_) => return CliCommand::Invalid(format!("'{}' is not a byte count", value)),
            },
            extra => return CliCommand::Invalid(format!("unexpected argument '{}'", extra)),
        }
    }

    match bytes {
        Some(bytes) => CliCommand::Size { bytes, decimals },
        None => CliCommand::Invalid("size needs a byte count".to_string()),
    }
}

fn parse_files(args: &[String]) -> CliCommand {
    if let Some(flag) = args.iter().find(|a| a.starts_with('-')) {
        return CliCommand::Invalid(format!("unknown option '{}'", flag));
    }
    CliCommand::RunTui {
        files: args.iter().map(PathBuf::from).collect(),
    }
}
