//! Per-process record and utilization math

use std::cmp::Ordering;

use crate::collector::CounterSource;

/// One tracked process. Identity fields are fetched once when the pid
/// first appears; counters and derived values are refreshed every cycle.
/// A pid that disappears and later returns gets a brand-new record, never
/// this one back.
#[derive(Debug, Clone)]
pub struct Process {
    pid: u32,
    command: String,
    user: String,
    start_tick: u64,
    rss_kb: u64,
    last_active_ticks: u64,
    last_system_ticks: u64,
    cpu_fraction: f64,
    age_secs: f64,
}

impl Process {
    /// Record for a newly appeared pid. The command line may come back
    /// empty when the process exited before the read completed; that is a
    /// valid state, not an error.
    pub fn new(pid: u32, src: &dyn CounterSource) -> Self {
        Self {
            pid,
            command: src.process_command(pid),
            user: src.process_user(pid),
            start_tick: src.process_start_tick(pid),
            rss_kb: 0,
            last_active_ticks: 0,
            last_system_ticks: 0,
            cpu_fraction: 0.0,
            age_secs: 0.0,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn start_tick(&self) -> u64 {
        self.start_tick
    }

    pub fn cpu_fraction(&self) -> f64 {
        self.cpu_fraction
    }

    /// Active ticks observed at the most recent update.
    pub fn active_ticks(&self) -> u64 {
        self.last_active_ticks
    }

    /// System-wide tick total observed at the most recent update.
    pub fn system_ticks(&self) -> u64 {
        self.last_system_ticks
    }

    pub fn set_rss_kb(&mut self, rss_kb: u64) {
        self.rss_kb = rss_kb;
    }

    /// Recomputes the CPU fraction as a lifetime average: seconds of CPU
    /// time consumed per second of process age. An active-tick reading
    /// below the cached previous one means the pid exited between listing
    /// and reading; such a cycle is skipped and the previous value stands.
    /// Zero or negative age and a zero tick rate both resolve to 0.0.
    pub fn update_utilization(
        &mut self,
        active_ticks: u64,
        system_ticks: u64,
        age_secs: f64,
        ticks_per_sec: u64,
    ) {
        if active_ticks < self.last_active_ticks {
            return;
        }
        self.last_active_ticks = active_ticks;
        self.last_system_ticks = system_ticks;
        self.age_secs = age_secs;
        if age_secs <= 0.0 || ticks_per_sec == 0 {
            self.cpu_fraction = 0.0;
            return;
        }
        self.cpu_fraction = (active_ticks as f64 / ticks_per_sec as f64) / age_secs;
    }

    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            pid: self.pid,
            user: self.user.clone(),
            command: self.command.clone(),
            cpu_fraction: self.cpu_fraction,
            memory_mb: self.rss_kb / 1024,
            age_seconds: self.age_secs.max(0.0) as u64,
        }
    }
}

/// Owned display view of one process; the whole contract the rendering
/// layer consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub user: String,
    pub command: String,
    pub cpu_fraction: f64,
    pub memory_mb: u64,
    pub age_seconds: u64,
}

/// Display ordering: CPU fraction descending, pid ascending on ties.
pub fn display_order(a: &ProcessSnapshot, b: &ProcessSnapshot) -> Ordering {
    b.cpu_fraction
        .partial_cmp(&a.cpu_fraction)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.pid.cmp(&b.pid))
}
