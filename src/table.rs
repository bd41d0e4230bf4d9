//! Tracked process set and per-cycle reconciliation

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::collector::CounterSource;
use crate::process::{display_order, Process, ProcessSnapshot};

/// The set of tracked processes, keyed by pid. The collection itself is
/// unordered; ordering exists only on the snapshot a refresh returns.
#[derive(Debug, Default)]
pub struct ProcessTable {
    entries: HashMap<u32, Process>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, pid: u32) -> Option<&Process> {
        self.entries.get(&pid)
    }

    /// One sampling cycle: reconcile the tracked set against the live pid
    /// list, refresh every tracked process from the source, and return a
    /// freshly allocated snapshot ordered for display. A failed pid
    /// enumeration surfaces as an empty snapshot, not an error.
    pub fn refresh(&mut self, src: &dyn CounterSource) -> Vec<ProcessSnapshot> {
        let live: HashSet<u32> = src.pids().into_iter().collect();

        // An evicted pid is gone for good; a later reappearance of the
        // same number is a new process with fresh state.
        self.entries.retain(|pid, _| live.contains(pid));
        for &pid in &live {
            self.entries
                .entry(pid)
                .or_insert_with(|| Process::new(pid, src));
        }

        let ticks_per_sec = src.ticks_per_second();
        let uptime = src.system_uptime_seconds();
        let system_ticks = src.system_active_ticks();

        for p in self.entries.values_mut() {
            let started_secs = if ticks_per_sec == 0 {
                0.0
            } else {
                p.start_tick() as f64 / ticks_per_sec as f64
            };
            p.update_utilization(
                src.process_active_ticks(p.pid()),
                system_ticks,
                uptime - started_secs,
                ticks_per_sec,
            );
            p.set_rss_kb(src.process_rss_kb(p.pid()));
        }
        debug!("tracking {} processes", self.entries.len());

        let mut snapshot: Vec<ProcessSnapshot> =
            self.entries.values().map(Process::snapshot).collect();
        snapshot.sort_by(display_order);
        snapshot
    }
}
