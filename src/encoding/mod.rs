//! Byte buffer encoders.
//!
//! Pure functions that render a byte buffer as text for previewing:
//!
//! | Format | Function | Bytes shown | Marker when cut |
//! |--------|----------|-------------|-----------------|
//! | Hex dump | [`encode_hex`] | caller limit (512) | none |
//! | Bit string | [`encode_binary`] | caller limit (256) | none |
//! | Python literal | [`encode_python_bytes`] | 2000 | `# ... truncated (showing 2000 of N bytes)` |
//! | C array | [`encode_c_array`] | 2000 | `// ... truncated (showing 2000 of N bytes)` |
//! | Base64 | [`encode_base64`] | 5000 | `// ... base64 truncated for preview performance` |
//!
//! Every encoder returns an [`EncodedPreview`] carrying the text and how much
//! of the buffer it covers.

mod size;
mod text;

pub use size::{format_bytes, format_bytes_with};
pub use text::{
    encode_base64, encode_binary, encode_c_array, encode_hex, encode_python_bytes,
    BASE64_PREVIEW_LIMIT, BINARY_PREVIEW_LIMIT, HEX_PREVIEW_LIMIT, SOURCE_LITERAL_LIMIT,
};

use std::fmt;
use std::str::FromStr;

/// Text rendering of a buffer prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPreview {
    /// Rendered text, including any truncation comment
    pub text: String,
    /// Whether bytes past the limit were left out
    pub truncated: bool,
    /// Number of bytes rendered
    pub shown: usize,
    /// Length of the whole buffer
    pub total: usize,
}

impl EncodedPreview {
    pub fn new(text: String, truncated: bool, shown: usize, total: usize) -> Self {
        Self {
            text,
            truncated,
            shown,
            total,
        }
    }
}

impl fmt::Display for EncodedPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFormat {
    Hex,
    Binary,
    PythonBytes,
    CArray,
    Base64,
}

impl PreviewFormat {
    pub const ALL: [PreviewFormat; 5] = [
        PreviewFormat::Hex,
        PreviewFormat::Binary,
        PreviewFormat::PythonBytes,
        PreviewFormat::CArray,
        PreviewFormat::Base64,
    ];

    /// Encode `bytes` using this format's default limit.
    pub fn encode(&self, bytes: &[u8]) -> EncodedPreview {
        match self {
            PreviewFormat::Hex => encode_hex(bytes, HEX_PREVIEW_LIMIT),
            PreviewFormat::Binary => encode_binary(bytes, BINARY_PREVIEW_LIMIT),
            PreviewFormat::PythonBytes => encode_python_bytes(bytes),
            PreviewFormat::CArray => encode_c_array(bytes),
            PreviewFormat::Base64 => encode_base64(bytes),
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PreviewFormat::Hex => "hex",
            PreviewFormat::Binary => "binary",
            PreviewFormat::PythonBytes => "python",
            PreviewFormat::CArray => "c",
            PreviewFormat::Base64 => "base64",
        }
    }
}

impl fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown format '{}' (expected one of: hex, binary, python, c, base64)",
            self.0
        )
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for PreviewFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(PreviewFormat::Hex),
            "binary" | "bin" => Ok(PreviewFormat::Binary),
            "python" | "py" => Ok(PreviewFormat::PythonBytes),
            "c" | "carray" => Ok(PreviewFormat::CArray),
            "base64" | "b64" => Ok(PreviewFormat::Base64),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
