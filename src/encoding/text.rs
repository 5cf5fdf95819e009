//! Text renderings of a byte buffer.
//!
//! Each encoder reads the first `min(len, limit)` bytes of the input and
//! returns an [`EncodedPreview`]. The input is never modified.

use std::fmt::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::EncodedPreview;

/// Default number of bytes shown by [`encode_hex`].
pub const HEX_PREVIEW_LIMIT: usize = 512;

/// Default number of bytes shown by [`encode_binary`].
pub const BINARY_PREVIEW_LIMIT: usize = 256;

/// Bytes rendered by the Python byte-literal and C array encoders.
pub const SOURCE_LITERAL_LIMIT: usize = 2000;

/// Bytes rendered by the Base64 encoder.
pub const BASE64_PREVIEW_LIMIT: usize = 5000;

/// Values per line in the C array body.
const C_ARRAY_VALUES_PER_LINE: usize = 12;

const C_ARRAY_LINE_BREAK: &str = "\n  ";

/// Split the buffer into the rendered prefix and the bookkeeping for it.
fn select_prefix(bytes: &[u8], limit: usize) -> (&[u8], bool) {
    let shown = bytes.len().min(limit);
    (&bytes[..shown], bytes.len() > limit)
}

fn truncation_note(comment: &str, total: usize) -> String {
    format!(
        "\n{} ... truncated (showing {} of {} bytes)",
        comment, SOURCE_LITERAL_LIMIT, total
    )
}

/// Render bytes as space-separated uppercase hex pairs.
///
/// Bytes past `limit` are dropped without a marker.
pub fn encode_hex(bytes: &[u8], limit: usize) -> EncodedPreview {
    let (shown, truncated) = select_prefix(bytes, limit);

    let mut text = String::with_capacity(shown.len() * 3);
    for (idx, byte) in shown.iter().enumerate() {
        if idx > 0 {
            text.push(' ');
        }
        let _ = write!(text, "{:02X}", byte);
    }

    EncodedPreview::new(text, truncated, shown.len(), bytes.len())
}

/// Render bytes as space-separated 8-digit bit strings.
pub fn encode_binary(bytes: &[u8], limit: usize) -> EncodedPreview {
    let (shown, truncated) = select_prefix(bytes, limit);

    let mut text = String::with_capacity(shown.len() * 9);
    for (idx, byte) in shown.iter().enumerate() {
        if idx > 0 {
            text.push(' ');
        }
        let _ = write!(text, "{:08b}", byte);
    }

    EncodedPreview::new(text, truncated, shown.len(), bytes.len())
}

/// Render bytes as a Python `bytes` literal assigned to `file_data`.
///
/// Escapes use lowercase hex digits. Buffers over 2000 bytes get a trailing
/// comment line with the exact total size.
pub fn encode_python_bytes(bytes: &[u8]) -> EncodedPreview {
    let (shown, truncated) = select_prefix(bytes, SOURCE_LITERAL_LIMIT);

    let mut text = String::with_capacity(16 + shown.len() * 4);
    text.push_str("file_data = b'");
    for byte in shown {
        let _ = write!(text, "\\x{:02x}", byte);
    }
    text.push('\'');

    if truncated {
        text.push_str(&truncation_note("#", bytes.len()));
    }

    EncodedPreview::new(text, truncated, shown.len(), bytes.len())
}

/// Render bytes as a C `unsigned char` array declaration.
///
/// The declared size is always the full buffer length, even when the body
/// only holds the first 2000 values.
pub fn encode_c_array(bytes: &[u8]) -> EncodedPreview {
    let (shown, truncated) = select_prefix(bytes, SOURCE_LITERAL_LIMIT);

    let mut text = format!(
        "// Generated C/C++ Array\nconst unsigned char file_data[{}] = {{{}",
        bytes.len(),
        C_ARRAY_LINE_BREAK
    );
    for (idx, byte) in shown.iter().enumerate() {
        let _ = write!(text, "0x{:02X}, ", byte);
        if (idx + 1) % C_ARRAY_VALUES_PER_LINE == 0 {
            text.push_str(C_ARRAY_LINE_BREAK);
        }
    }

    // A full last row leaves ", \n  "; a partial one leaves ", ".
    let trailing_row = format!(", {}", C_ARRAY_LINE_BREAK);
    if text.ends_with(&trailing_row) {
        text.truncate(text.len() - trailing_row.len());
    } else if text.ends_with(", ") {
        text.truncate(text.len() - 2);
    }
    text.push_str("\n};");

    if truncated {
        text.push_str(&truncation_note("//", bytes.len()));
    }

    EncodedPreview::new(text, truncated, shown.len(), bytes.len())
}

/// Standard padded Base64 of the first 5000 bytes.
///
/// Only the selected prefix is encoded. The truncation comment carries no
/// byte counts, matching the converter's historical output.
pub fn encode_base64(bytes: &[u8]) -> EncodedPreview {
    let (shown, truncated) = select_prefix(bytes, BASE64_PREVIEW_LIMIT);

    let mut text = BASE64.encode(shown);
    if truncated {
        text.push_str("\n\n// ... base64 truncated for preview performance");
    }

    EncodedPreview::new(text, truncated, shown.len(), bytes.len())
}
