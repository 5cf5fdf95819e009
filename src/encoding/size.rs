//! Human-readable byte counts.

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const STEP: f64 = 1024.0;
/// Largest number of decimal places honored.
const MAX_DECIMALS: i32 = 100;
const MAX_EXACT_SCALE: i32 = 15;

/// Format a byte count with two decimal places.
///
/// ```
/// use omnitool::encoding::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 Bytes");
/// assert_eq!(format_bytes(1024), "1 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, 2)
}

/// Format a byte count with `decimals` places, dropping trailing zeros.
///
/// `decimals` is clamped to `0..=100`. Ties round up (`1.125` -> `1.13`).
/// TB is the largest unit.
pub fn format_bytes_with(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let places = decimals.clamp(0, MAX_DECIMALS);
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    // Float formatting rounds ties to even; round half away from zero first.
    // Past f64 precision the scaling would only add error.
    let rounded = if places <= MAX_EXACT_SCALE {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    } else {
        value
    };
    let rendered = format!("{:.*}", places as usize, rounded);
    format!("{} {}", trim_decimal(&rendered), UNITS[unit])
}

/// `"1.50"` -> `"1.5"`, `"2.00"` -> `"2"`.
fn trim_decimal(rendered: &str) -> &str {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered.trim_end_matches('0').trim_end_matches('.')
}
