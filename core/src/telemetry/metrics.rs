use serde::Serialize;
use std::sync::Mutex;

/// Counters for UI interactions handled by a session.
pub struct InteractionMetrics {
    inner: Mutex<Counters>,
}

/// Point-in-time copy of the interaction counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub applied: usize,
    pub ignored: usize,
    pub failed: usize,
}

impl InteractionMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_applied(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.applied += 1;
        }
    }

    pub fn record_ignored(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.ignored += 1;
        }
    }

    pub fn record_failed(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.failed += 1;
        }
    }

    pub fn snapshot(&self) -> Counters {
        self.inner.lock().map(|c| *c).unwrap_or_default()
    }
}

impl Default for InteractionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_interactions() {
        let metrics = InteractionMetrics::new();
        metrics.record_applied();
        metrics.record_applied();
        metrics.record_ignored();
        assert_eq!(
            metrics.snapshot(),
            Counters {
                applied: 2,
                ignored: 1,
                failed: 0
            }
        );
    }
}
