//! Processing statistics tracking.
//!
//! Thread-safe counters for every absorbed failure, so a run can report what
//! it skipped without aborting.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, WarningType};

/// One zero-initialized atomic counter per enum variant.
struct Counters<T> {
    counts: HashMap<T, AtomicUsize>,
}

impl<T> Counters<T>
where
    T: IntoEnumIterator + Copy + Eq + Hash,
{
    fn zeroed() -> Self {
        Self {
            counts: T::iter().map(|key| (key, AtomicUsize::new(0))).collect(),
        }
    }

    fn increment(&self, key: T) {
        if let Some(counter) = self.counts.get(&key) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn get(&self, key: T) -> usize {
        self.counts
            .get(&key)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    fn total(&self) -> usize {
        self.counts.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Non-zero counts in declaration order.
    fn non_zero(&self) -> Vec<(T, usize)> {
        T::iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Thread-safe processing statistics tracker.
///
/// Every error and warning type starts at zero, so lookups never miss. The
/// struct is shared across tasks through `Arc`.
pub struct ProcessingStats {
    errors: Counters<ErrorType>,
    warnings: Counters<WarningType>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: Counters::zeroed(),
            warnings: Counters::zeroed(),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    /// Error types with a non-zero count, in declaration order.
    pub fn error_counts(&self) -> Vec<(ErrorType, usize)> {
        self.errors.non_zero()
    }

    /// Warning types with a non-zero count, in declaration order.
    pub fn warning_counts(&self) -> Vec<(WarningType, usize)> {
        self.warnings.non_zero()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
