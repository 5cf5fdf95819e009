//! A file loaded into the converter.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use super::mime::{guess_mime, DEFAULT_MIME};
use crate::encoding::{
    encode_base64, encode_binary, encode_c_array, encode_hex, encode_python_bytes,
    EncodedPreview, BINARY_PREVIEW_LIMIT, HEX_PREVIEW_LIMIT,
};
use crate::error::{classify_io_error, SystemError};
use crate::models::TabOption;

/// Placeholder shown in the AI tab until a script arrives.
pub const SCRIPT_WAITING: &str = "# Waiting for AI analysis...";

/// Progress of the AI loader script for one file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScriptState {
    #[default]
    Pending,
    Ready(String),
}

/// An immutable buffer plus every preview derived from it.
///
/// Encodings are computed once in the constructor and never again.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    data: Arc<[u8]>,
    pub hex: EncodedPreview,
    pub binary: EncodedPreview,
    pub c_array: EncodedPreview,
    pub base64: EncodedPreview,
    pub python_bytes: EncodedPreview,
    pub script: ScriptState,
}

impl FileRecord {
    /// Build a record from raw bytes. A missing or blank MIME type becomes
    /// `application/octet-stream`.
    pub fn from_bytes(name: impl Into<String>, mime_type: Option<&str>, data: impl Into<Arc<[u8]>>) -> Self {
        let data: Arc<[u8]> = data.into();
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MIME)
            .to_string();

        let record = Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            mime_type,
            size: data.len() as u64,
            hex: encode_hex(&data, HEX_PREVIEW_LIMIT),
            binary: encode_binary(&data, BINARY_PREVIEW_LIMIT),
            c_array: encode_c_array(&data),
            base64: encode_base64(&data),
            python_bytes: encode_python_bytes(&data),
            script: ScriptState::Pending,
            data,
        };
        debug!(id = %record.id, name = %record.name, size = record.size, "file record created");
        record
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, SystemError> {
        if path.is_dir() {
            return Err(SystemError::IsDirectory {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path)
            .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "read"))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = guess_mime(&name);
        Ok(Self::from_bytes(name, Some(mime), bytes))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_script_pending(&self) -> bool {
        matches!(self.script, ScriptState::Pending)
    }

    /// Header block followed by the hex dump and bit stream.
    pub fn binary_report(&self) -> String {
        format!(
            "FILE_ID: {}\nFILE_NAME: {}\nFILE_SIZE: {} bytes\nTYPE: {}\n\n[HEX DUMP START]\n{}\n\n[BINARY STREAM START]\n{}\n...",
            self.id, self.name, self.size, self.mime_type, self.hex, self.binary
        )
    }

    pub fn python_raw_script(&self) -> String {
        format!(
            "# RAW BYTE LOADER FOR: {}\n# Automatically generated\n{}",
            self.name, self.python_bytes
        )
    }

    /// The AI script, or the waiting placeholder while none is available.
    pub fn smart_script(&self) -> &str {
        match &self.script {
            ScriptState::Ready(script) if !script.is_empty() => script,
            _ => SCRIPT_WAITING,
        }
    }

    /// Full text of the given converter tab.
    pub fn tab_content(&self, tab: TabOption) -> String {
        match tab {
            TabOption::Binary => self.binary_report(),
            TabOption::CArray => self.c_array.text.clone(),
            TabOption::PythonRaw => self.python_raw_script(),
            TabOption::Base64 => self.base64.text.clone(),
            TabOption::PythonSmart => self.smart_script().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_bytes_precomputes_encodings() {
        let record = FileRecord::from_bytes("man.txt", Some("text/plain"), vec![0x4D, 0x61, 0x6E]);
        assert_eq!(record.size, 3);
        assert_eq!(record.hex.text, "4D 61 6E");
        assert_eq!(record.binary.text, "01001101 01100001 01101110");
        assert!(record.base64.text.starts_with("TWFu"));
        assert!(record.is_script_pending());
        assert_eq!(Uuid::parse_str(&record.id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_default_mime() {
        let record = FileRecord::from_bytes("blob", None, Vec::new());
        assert_eq!(record.mime_type, DEFAULT_MIME);
        let record = FileRecord::from_bytes("blob", Some(" "), Vec::new());
        assert_eq!(record.mime_type, DEFAULT_MIME);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = FileRecord::from_bytes("a", None, vec![1]);
        let b = FileRecord::from_bytes("a", None, vec![1]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_binary_report_layout() {
        let record = FileRecord::from_bytes("x.bin", None, vec![0xFF]);
        let expected = format!(
            "FILE_ID: {}\nFILE_NAME: x.bin\nFILE_SIZE: 1 bytes\nTYPE: application/octet-stream\n\n[HEX DUMP START]\nFF\n\n[BINARY STREAM START]\n11111111\n...",
            record.id
        );
        assert_eq!(record.binary_report(), expected);
    }

    #[test]
    fn test_python_raw_script() {
        let record = FileRecord::from_bytes("x.bin", None, vec![0x00, 0xAB]);
        let script = record.python_raw_script();
        assert!(script.starts_with("# RAW BYTE LOADER FOR: x.bin\n# Automatically generated\n"));
        assert!(script.ends_with(&record.python_bytes.text));
    }

    #[test]
    fn test_smart_script_placeholder() {
        let mut record = FileRecord::from_bytes("x", None, vec![1]);
        assert_eq!(record.smart_script(), SCRIPT_WAITING);

        record.script = ScriptState::Ready(String::new());
        assert_eq!(record.smart_script(), SCRIPT_WAITING);

        record.script = ScriptState::Ready("import struct".to_string());
        assert_eq!(record.tab_content(TabOption::PythonSmart), "import struct");
    }

    #[test]
    fn test_tab_content_dispatch() {
        let record = FileRecord::from_bytes("x", None, vec![1, 2, 3]);
        assert_eq!(record.tab_content(TabOption::CArray), record.c_array.text);
        assert_eq!(record.tab_content(TabOption::Base64), record.base64.text);
        assert!(record.tab_content(TabOption::Binary).starts_with("FILE_ID: "));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();

        let record = FileRecord::from_path(file.path()).unwrap();
        assert_eq!(record.mime_type, "image/png");
        assert_eq!(record.data(), &[0x89, 0x50, 0x4E, 0x47]);
        assert!(record.name.ends_with(".png"));
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FileRecord::from_path(dir.path()),
            Err(SystemError::IsDirectory { .. })
        ));
        assert!(matches!(
            FileRecord::from_path(&dir.path().join("missing.bin")),
            Err(SystemError::FileNotFound { .. })
        ));
    }
}
