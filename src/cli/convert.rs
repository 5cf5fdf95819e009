//! `convert` and `size` commands.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::encoding::{format_bytes_with, PreviewFormat};
use crate::error::{classify_io_error, OmniResult};

/// Read `path` and encode it.
pub fn convert_file(path: &Path, format: PreviewFormat) -> OmniResult<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "read"))?;
    let preview = format.encode(&bytes);
    info!(
        path = %path.display(),
        %format,
        shown = preview.shown,
        total = preview.total,
        "file converted"
    );
    Ok(preview.text)
}

/// Encode `path`, writing to `out` if given, otherwise to `stdout`.
pub fn handle_convert_command<W: Write>(
    path: &Path,
    format: PreviewFormat,
    out: Option<&Path>,
    stdout: &mut W,
) -> OmniResult<()> {
    let text = convert_file(path, format)?;
    match out {
        Some(target) => {
            std::fs::write(target, &text)
                .map_err(|e| classify_io_error(e, Some(target.to_path_buf()), "write"))?;
            writeln!(stdout, "Wrote {} to {}", format, target.display())?;
        }
        None => writeln!(stdout, "{}", text)?,
    }
    Ok(())
}

pub fn handle_size_command<W: Write>(bytes: u64, decimals: i32, stdout: &mut W) -> OmniResult<()> {
    writeln!(stdout, "{}", format_bytes_with(bytes, decimals))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OmniError, SystemError};

    #[test]
    fn test_convert_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("man.bin");
        std::fs::write(&input, b"Man").unwrap();

        let mut out = Vec::new();
        handle_convert_command(&input, PreviewFormat::Base64, None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "TWFu\n");
    }

    #[test]
    fn test_convert_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.c");
        std::fs::write(&input, [0xDE, 0xAD]).unwrap();

        let mut out = Vec::new();
        handle_convert_command(&input, PreviewFormat::CArray, Some(&output), &mut out).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("file_data[2]"));
        assert!(written.contains("0xDE, 0xAD"));
        assert!(String::from_utf8(out).unwrap().starts_with("Wrote c to "));
    }

    #[test]
    fn test_convert_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(&dir.path().join("nope"), PreviewFormat::Hex).unwrap_err();
        assert!(matches!(err, OmniError::System(SystemError::FileNotFound { .. })));
    }

    #[test]
    fn test_size_command() {
        let mut out = Vec::new();
        handle_size_command(1536, 1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.5 KB\n");
    }

    #[test]
    fn test_convert_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("man.bin");
        let log = dir.path().join("cli.log");
        std::fs::write(&input, b"Man").unwrap();

        let (writer, guard) = crate::startup::file_writer(&log).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            convert_file(&input, PreviewFormat::Hex).unwrap();
        });
        drop(guard);

        let contents = std::fs::read_to_string(&log).unwrap();
        assert!(contents.contains("file converted"));
        assert!(contents.contains("total=3"));
    }

    #[test]
    fn test_size_command_rounds_ties_up() {
        let mut out = Vec::new();
        handle_size_command(1152, 2, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.13 KB\n");
    }
}
