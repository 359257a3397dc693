//! Error categorization and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::FixedInterval;

use super::types::ErrorType;

/// Creates the retry strategy for page fetches.
///
/// `Retry::spawn` runs the initial attempt and then one more attempt per
/// yielded delay, so `attempts` total attempts need `attempts - 1` delays.
/// The directory is polled politely, so the pause is fixed rather than
/// exponential.
pub fn get_retry_strategy(attempts: usize, delay: Duration) -> impl Iterator<Item = Duration> {
    FixedInterval::new(delay).take(attempts.saturating_sub(1))
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::PageFetchTimeout
    } else if error.is_connect() {
        ErrorType::PageFetchConnect
    } else if error.is_status() {
        ErrorType::PageFetchStatus
    } else {
        ErrorType::PageFetchOther
    }
}
