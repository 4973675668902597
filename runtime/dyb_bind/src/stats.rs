//! Per-site counters.
//!
//! `detections` counts capability inspections. With a working cache it stays
//! at one per `(site, type)` pair, except when concurrent first reads race.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct SiteStats {
    detections: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SiteStats {
    #[inline]
    pub(crate) fn record_detection(&self) {
        self.detections.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            detections: self.detections.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `SiteStats`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub detections: u64,
    pub hits: u64,
    pub misses: u64,
}

impl StatsSnapshot {
    /// Total reads observed.
    pub fn evaluations(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    /// Hit rate as a percentage (0.0-100.0).
    #[expect(
        clippy::cast_precision_loss,
        reason = "percentages do not need 64-bit precision"
    )]
    pub fn hit_rate(&self) -> f64 {
        let total = self.evaluations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    /// Sum two snapshots.
    #[must_use]
    pub fn merge(self, other: StatsSnapshot) -> Self {
        Self {
            detections: self.detections.saturating_add(other.detections),
            hits: self.hits.saturating_add(other.hits),
            misses: self.misses.saturating_add(other.misses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_reflects_records() {
        let stats = SiteStats::default();
        stats.record_miss();
        stats.record_detection();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();

        let snap = stats.snapshot();
        assert_eq!(
            snap,
            StatsSnapshot {
                detections: 1,
                hits: 3,
                misses: 1,
            }
        );
        assert_eq!(snap.evaluations(), 4);
        assert!((snap.hit_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_hit_rate_is_zero() {
        assert!(StatsSnapshot::default().hit_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_adds_fields() {
        let a = StatsSnapshot {
            detections: 1,
            hits: 2,
            misses: 1,
        };
        let b = StatsSnapshot {
            detections: 2,
            hits: 0,
            misses: 2,
        };
        assert_eq!(
            a.merge(b),
            StatsSnapshot {
                detections: 3,
                hits: 2,
                misses: 3,
            }
        );
    }
}
