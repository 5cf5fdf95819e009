//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so log output is discarded unless `OMNITOOL_LOG_FILE`
//! names a file to append to. File output goes through a non-blocking
//! `tracing-appender` worker. The filter comes from `OMNITOOL_LOG`
//! (`EnvFilter` syntax, default `info`).

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_VAR: &str = "OMNITOOL_LOG";
pub const LOG_FILE_VAR: &str = "OMNITOOL_LOG_FILE";

const DEFAULT_LOG_NAME: &str = "omnitool.log";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Sink,
    File(PathBuf),
}

impl LogTarget {
    pub fn from_env() -> Self {
        match std::env::var(LOG_FILE_VAR) {
            Ok(path) if !path.trim().is_empty() => LogTarget::File(PathBuf::from(path.trim())),
            _ => LogTarget::Sink,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Non-blocking appender for `path`, never rotated.
///
/// Lines are flushed by a background worker until the guard is dropped.
pub fn file_writer(path: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_NAME.to_string());

    std::fs::create_dir_all(&dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber. Safe to call more than once.
///
/// For a file target the returned guard must be held for as long as lines
/// should reach the file. Fails only when the log file cannot be opened.
pub fn init_logging(target: &LogTarget) -> io::Result<Option<WorkerGuard>> {
    let (writer, guard) = match target {
        LogTarget::Sink => (BoxMakeWriter::new(io::sink), None),
        LogTarget::File(path) => {
            let (writer, guard) = file_writer(path)?;
            (BoxMakeWriter::new(writer), Some(guard))
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(writer)
        .try_init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_target_defaults_to_sink() {
        std::env::remove_var(LOG_FILE_VAR);
        assert_eq!(LogTarget::from_env(), LogTarget::Sink);
    }

    #[test]
    #[serial]
    fn test_target_reads_file_var() {
        std::env::set_var(LOG_FILE_VAR, "/tmp/omnitool.log");
        assert_eq!(
            LogTarget::from_env(),
            LogTarget::File(PathBuf::from("/tmp/omnitool.log"))
        );
        std::env::remove_var(LOG_FILE_VAR);
    }

    #[test]
    fn test_init_with_unwritable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let result = init_logging(&LogTarget::File(dir.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_init_sink_is_idempotent() {
        assert!(init_logging(&LogTarget::Sink).unwrap().is_none());
        assert!(init_logging(&LogTarget::Sink).unwrap().is_none());
    }

    #[test]
    fn test_file_writer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("run.log");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "earlier\n").unwrap();

        let (writer, guard) = file_writer(&path).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("converter ready");
        });
        // Dropping the guard flushes the worker
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier\n"));
        assert!(contents.contains("converter ready"));
    }

    #[test]
    fn test_file_writer_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("omnitool.log");
        let (_writer, guard) = file_writer(&path).unwrap();
        drop(guard);
        assert!(path.exists());
    }
}
