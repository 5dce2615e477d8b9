//! # Shared Display Helpers
//!
//! Small formatting helpers used by the console when printing node and order
//! tables next to the topology map.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{activity_bar, format_latency};
//!
//! assert_eq!(format_latency(42), "42ms");
//! assert_eq!(format_latency(1500), "1.5s");
//! assert_eq!(activity_bar(0.5, 4), "[██░░]");
//! ```

/// Format a latency in milliseconds, switching to seconds from 1000 ms.
pub fn format_latency(latency_ms: u32) -> String {
    if latency_ms < 1000 {
        format!("{}ms", latency_ms)
    } else {
        format!("{:.1}s", latency_ms as f64 / 1000.0)
    }
}

/// Render `activity` (clamped to `[0, 1]`) as a bracketed bar of `width` cells.
///
/// Filled cells are rounded to the nearest whole cell.
pub fn activity_bar(activity: f64, width: usize) -> String {
    let level = if activity.is_nan() { 0.0 } else { activity.clamp(0.0, 1.0) };
    let filled = ((level * width as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(width - filled));
    bar.push(']');
    bar
}

/// Pad or truncate `text` to exactly `width` characters.
pub fn fit_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count >= width {
        text.chars().take(width).collect()
    } else {
        let mut out = text.to_string();
        out.extend(std::iter::repeat(' ').take(width - count));
        out
    }
}
