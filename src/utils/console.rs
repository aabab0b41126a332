// src/utils/console.rs

//! Human-readable console output.
//!
//! Progress lines, headers and summaries are printed to stdout with a local
//! timestamp. Diagnostics go through the `log` facade instead.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence all console output (diagnostic logging is unaffected).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn enabled() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

/// Prefix a message with the current local time.
fn stamp(message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] {}", timestamp, message)
}

fn emit(message: &str) {
    if enabled() {
        println!("{}", stamp(message));
    }
}

/// Format a progress line: `label current/total (pct%)`.
pub fn format_progress(label: &str, current: usize, total: usize) -> String {
    let pct = if total == 0 {
        100.0
    } else {
        current as f64 / total as f64 * 100.0
    };
    format!("{} {}/{} ({:.2}%)", label, current, total, pct)
}

/// Print a progress line.
pub fn progress(label: &str, current: usize, total: usize) {
    emit(&format_progress(label, current, total));
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    emit(&format!("[STEP {}/{}] {}", step_num, total, message));
}

/// Log a header
pub fn header(title: &str) {
    let border = "═".repeat(60);
    emit(&border);
    emit(&format!("  {}", title));
    emit(&border);
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    emit(&format!("[SUMMARY] {}", title));
    for (key, value) in items {
        emit(&format!("    {}: {}", key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress("Book pages", 1, 4), "Book pages 1/4 (25.00%)");
        assert_eq!(format_progress("Book pages", 3, 3), "Book pages 3/3 (100.00%)");
        assert_eq!(format_progress("Book pages", 1, 3), "Book pages 1/3 (33.33%)");
    }

    #[test]
    fn test_format_progress_empty_total() {
        assert_eq!(format_progress("x", 0, 0), "x 0/0 (100.00%)");
    }
}
