/// Size formatting utilities for reports.
///
/// All sizes are `u64` bytes; floating point only appears at the
/// formatting boundary.

const KIB: f64 = 1024.0;
const GIB: f64 = KIB * KIB * KIB;

/// Format a byte count with a binary unit (B, KB, MB, GB, TB).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for candidate in UNITS {
        value /= KIB;
        unit = candidate;
        if value < KIB {
            break;
        }
    }
    // Small values get one decimal, GB and above get two.
    if unit == "KB" || unit == "MB" {
        format!("{value:.1} {unit}")
    } else {
        format!("{value:.2} {unit}")
    }
}

/// Format a count with thousands separators ("1,234,567").
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Bytes expressed in binary gigabytes, for the disk-usage line.
pub fn to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB
}
