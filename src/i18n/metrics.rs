//! Dictionary lookup metrics.
//!
//! Counts how lookups were resolved so missing translations show up in
//! reports, not only in logs.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a [`Dictionary`](super::Dictionary).
#[derive(Debug, Default)]
pub struct DictionaryMetrics {
    /// Key found in the requested locale
    hits: AtomicUsize,

    /// Key missing in the requested locale, served from the default locale
    fallbacks: AtomicUsize,

    /// Key missing everywhere, key returned as-is
    misses: AtomicUsize,
}

impl DictionaryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let total = hits + fallbacks + misses;

        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total,
            hits,
            fallbacks,
            misses,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    #[cfg(test)]
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of dictionary lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups
    pub lookups: usize,

    pub hits: usize,

    pub fallbacks: usize,

    pub misses: usize,

    /// Direct hit rate as a percentage (0-100)
    pub hit_rate: f64,
}
