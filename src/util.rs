//! Utility functions for issueblog

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

/// Timestamp pattern used for comment headers.
pub const COMMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Restricts `value` to the inclusive range `[min, max]`.
///
/// When `min > max` the result is `max`, matching `min(max(value, min), max)`.
///
/// # Examples
///
/// ```
/// use issueblog::clamp;
///
/// assert_eq!(clamp(0, 1, 5), 1);
/// assert_eq!(clamp(9, 1, 5), 5);
/// ```
pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    std::cmp::min(std::cmp::max(value, min), max)
}

/// Formats UTC timestamp with a chrono format pattern.
///
/// # Arguments
///
/// * `timestamp`: Instant to format
/// * `pattern`: chrono strftime style pattern
///
/// # Returns
///
/// Formatted timestamp string
pub fn format_datetime(timestamp: &DateTime<Utc>, pattern: &str) -> String {
    timestamp.format(pattern).to_string()
}

/// Locks mutex, recovering the guard if a previous holder panicked.
///
/// Guarded values are only replaced wholesale, so a poisoned lock still
/// holds consistent data.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
