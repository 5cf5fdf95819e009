//! Clipboard output and file export for converter tabs.
//!
//! Also recognizes file paths pasted into the terminal, which is how most
//! terminals deliver drag-and-drop.

use std::path::{Path, PathBuf};

use arboard::Clipboard;
use tracing::debug;

use crate::error::{classify_io_error, SystemError};

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), SystemError> {
    let mut clipboard = Clipboard::new().map_err(|e| SystemError::Clipboard {
        message: e.to_string(),
    })?;

    clipboard.set_text(text).map_err(|e| SystemError::Clipboard {
        message: e.to_string(),
    })?;

    debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

/// Where exported files go: the user's download directory, else the cwd.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write `content` to `dir/filename`, replacing any existing file.
pub fn save_output(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, SystemError> {
    let path = dir.join(filename);
    std::fs::write(&path, content)
        .map_err(|e| classify_io_error(e, Some(path.clone()), "write"))?;
    debug!(path = %path.display(), bytes = content.len(), "output saved");
    Ok(path)
}

/// Interpret pasted text as a single file path, if it looks like one.
///
/// Handles the forms terminals produce on drop: surrounding quotes,
/// `file://` URLs, and backslash-escaped spaces.
pub fn pasted_file_path(text: &str) -> Option<PathBuf> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return None;
    }

    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let unescaped = without_scheme.replace("\\ ", " ");

    let path = PathBuf::from(unescaped);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_output(dir.path(), "data.c", "int x;").unwrap();
        assert_eq!(path, dir.path().join("data.c"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "int x;");
    }

    #[test]
    fn test_save_output_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_output(&dir.path().join("nope"), "a.txt", "x").unwrap_err();
        assert!(matches!(err, SystemError::FileNotFound { .. }));
    }

    #[test]
    fn test_pasted_plain_and_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("my file.bin");
        std::fs::write(&file, [1u8, 2, 3]).unwrap();
        let raw = file.display().to_string();

        assert_eq!(pasted_file_path(&raw), Some(file.clone()));
        assert_eq!(pasted_file_path(&format!("'{}'\n", raw)), Some(file.clone()));
        assert_eq!(pasted_file_path(&format!("\"{}\"", raw)), Some(file.clone()));
        assert_eq!(
            pasted_file_path(&raw.replace(' ', "\\ ")),
            Some(file.clone())
        );
        assert_eq!(pasted_file_path(&format!("file://{}", raw)), Some(file));
    }

    #[test]
    fn test_pasted_non_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(pasted_file_path("hello world"), None);
        assert_eq!(pasted_file_path("a\nb"), None);
        assert_eq!(pasted_file_path(""), None);
        assert_eq!(pasted_file_path(&dir.path().display().to_string()), None);
    }

    #[test]
    fn test_default_export_dir_exists() {
        assert!(!default_export_dir().as_os_str().is_empty());
    }
}
