//! Top-level aggregate: one combined snapshot per sampling cycle

use crate::collector::CounterSource;
use crate::cpu::CpuSampler;
use crate::process::ProcessSnapshot;
use crate::table::ProcessTable;

/// Everything the display layer needs from one cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub cpu_fraction: f64,
    pub memory_fraction: f64,
    pub total_processes: u64,
    pub running_processes: u64,
    pub uptime_seconds: u64,
    pub processes: Vec<ProcessSnapshot>,
}

/// Owns the counter source and both samplers and drives them on the
/// caller's cadence. Immutable machine facts are read once at
/// construction.
pub struct System {
    source: Box<dyn CounterSource>,
    cpu: CpuSampler,
    table: ProcessTable,
    kernel: String,
    os: String,
}

impl System {
    pub fn new(source: Box<dyn CounterSource>) -> Self {
        let kernel = source.kernel_version();
        let os = source.os_name();
        Self {
            source,
            cpu: CpuSampler::new(),
            table: ProcessTable::new(),
            kernel,
            os,
        }
    }

    pub fn kernel(&self) -> &str {
        &self.kernel
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    /// Runs one sampling cycle. The first call reports CPU utilization
    /// since boot (warm-up sample); later calls report the interval since
    /// the previous one.
    pub fn refresh(&mut self) -> Snapshot {
        let cpu_fraction = self.cpu.utilization(self.source.as_ref());
        let processes = self.table.refresh(self.source.as_ref());

        let total_kb = self.source.memory_total_kb();
        let free_kb = self.source.memory_free_kb();
        let memory_fraction = if total_kb == 0 {
            0.0
        } else {
            total_kb.saturating_sub(free_kb) as f64 / total_kb as f64
        };

        Snapshot {
            cpu_fraction,
            memory_fraction,
            total_processes: self.source.total_processes(),
            running_processes: self.source.running_processes(),
            uptime_seconds: self.source.system_uptime_seconds() as u64,
            processes,
        }
    }
}
