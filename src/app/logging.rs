//! Progress logging utilities.

use log::info;

/// Logs progress of a batch that is `completed` out of `total` items in.
///
/// # Arguments
///
/// * `label` - What is being processed, e.g. "companies"
/// * `start_time` - When the batch started
/// * `completed` - Items finished so far
/// * `total` - Items in the batch
pub fn log_progress(label: &str, start_time: std::time::Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} {} in {:.2} seconds (~{:.2} {}/sec)",
        completed, total, label, elapsed_secs, rate, label
    );
}
