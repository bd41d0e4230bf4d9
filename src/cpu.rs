//! System-wide CPU utilization sampling

use crate::collector::CounterSource;

/// Derives the system CPU fraction from the delta between consecutive
/// tick samples. Exactly one prior sample is retained, so the first call
/// reports utilization since boot rather than since the previous call.
#[derive(Debug, Default)]
pub struct CpuSampler {
    last_active: u64,
    last_idle: u64,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of elapsed ticks spent active since the previous call.
    /// Returns 0.0 when the counters did not advance. The caches are
    /// updated on every call, advancing counters or not.
    pub fn utilization(&mut self, src: &dyn CounterSource) -> f64 {
        let active = src.system_active_ticks();
        let idle = src.system_idle_ticks();
        let delta_active = active.saturating_sub(self.last_active);
        let delta_idle = idle.saturating_sub(self.last_idle);
        self.last_active = active;
        self.last_idle = idle;

        let delta_total = delta_active + delta_idle;
        if delta_total == 0 {
            return 0.0;
        }
        delta_active as f64 / delta_total as f64
    }
}
