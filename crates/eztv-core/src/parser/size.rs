//! Human-readable byte-size parser
//!
//! The result tables print release sizes as strings like "657.3 MB" or
//! "1.2 GB". This module converts them to integer byte counts.

/// Parse a human-readable size string to bytes.
///
/// Uses the binary convention: 1 KB = 1024 bytes, so "1.0 GB" is
/// 1_073_741_824. A bare number is taken as a byte count. Empty, negative,
/// or otherwise malformed input yields 0 rather than an error, the same
/// tolerance the rest of the row extraction applies to broken cells.
///
/// # Arguments
/// * `text` - Size string such as "700 MB", "1.5GB", or "100 B"
///
/// # Examples
/// ```
/// use eztv_core::parser::parse_size;
///
/// assert_eq!(parse_size("1.0 GB"), 1_073_741_824);
/// assert_eq!(parse_size("700 MB"), 734_003_200);
/// assert_eq!(parse_size("not a size"), 0);
/// ```
pub fn parse_size(text: &str) -> u64 {
    let clean = text.trim();
    if clean.is_empty() {
        return 0;
    }

    // Split the numeric part from the unit, with or without a space
    let (num_part, unit_part) = match clean.find(|c: char| c.is_ascii_alphabetic()) {
        Some(pos) => (clean[..pos].trim(), clean[pos..].trim()),
        None => (clean, ""),
    };

    let value: f64 = match num_part.parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    if value < 0.0 || !value.is_finite() {
        return 0;
    }

    let multiplier: u64 = match unit_part.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "KB" => 1 << 10,
        "MB" => 1 << 20,
        "GB" => 1 << 30,
        "TB" => 1 << 40,
        _ => return 0,
    };

    (value * multiplier as f64) as u64
}
