//! Shared in-memory counter source for engine tests
#![allow(dead_code)]

use std::collections::HashMap;

use proctop::collector::CounterSource;

/// One synthetic process as the fake source reports it.
#[derive(Debug, Clone, Default)]
pub struct FakeProcess {
    pub active_ticks: u64,
    pub start_tick: u64,
    pub rss_kb: u64,
    pub command: String,
    pub user: String,
}

/// In-memory CounterSource with settable counters. Tests mutate it
/// between calls to simulate advancing samples and processes coming
/// and going.
#[derive(Debug, Clone, Default)]
pub struct FakeCounterSource {
    pub system_active: u64,
    pub system_idle: u64,
    pub uptime_secs: f64,
    pub ticks_per_sec: u64,
    pub memory_total_kb: u64,
    pub memory_free_kb: u64,
    pub total_processes: u64,
    pub running_processes: u64,
    pub processes: HashMap<u32, FakeProcess>,
}

impl FakeCounterSource {
    pub fn new() -> Self {
        Self {
            ticks_per_sec: 100,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, pid: u32, info: FakeProcess) {
        self.processes.insert(pid, info);
    }

    pub fn remove(&mut self, pid: u32) {
        self.processes.remove(&pid);
    }

    pub fn set_active_ticks(&mut self, pid: u32, ticks: u64) {
        if let Some(p) = self.processes.get_mut(&pid) {
            p.active_ticks = ticks;
        }
    }
}

impl CounterSource for FakeCounterSource {
    fn pids(&self) -> Vec<u32> {
        self.processes.keys().copied().collect()
    }

    fn system_active_ticks(&self) -> u64 {
        self.system_active
    }

    fn system_idle_ticks(&self) -> u64 {
        self.system_idle
    }

    fn system_uptime_seconds(&self) -> f64 {
        self.uptime_secs
    }

    fn ticks_per_second(&self) -> u64 {
        self.ticks_per_sec
    }

    fn memory_total_kb(&self) -> u64 {
        self.memory_total_kb
    }

    fn memory_free_kb(&self) -> u64 {
        self.memory_free_kb
    }

    fn total_processes(&self) -> u64 {
        self.total_processes
    }

    fn running_processes(&self) -> u64 {
        self.running_processes
    }

    fn kernel_version(&self) -> String {
        "6.1.0-fake".to_string()
    }

    fn os_name(&self) -> String {
        "Fake Linux".to_string()
    }

    fn process_active_ticks(&self, pid: u32) -> u64 {
        self.processes.get(&pid).map(|p| p.active_ticks).unwrap_or(0)
    }

    fn process_start_tick(&self, pid: u32) -> u64 {
        self.processes.get(&pid).map(|p| p.start_tick).unwrap_or(0)
    }

    fn process_rss_kb(&self, pid: u32) -> u64 {
        self.processes.get(&pid).map(|p| p.rss_kb).unwrap_or(0)
    }

    fn process_command(&self, pid: u32) -> String {
        self.processes
            .get(&pid)
            .map(|p| p.command.clone())
            .unwrap_or_default()
    }

    fn process_user(&self, pid: u32) -> String {
        self.processes
            .get(&pid)
            .map(|p| p.user.clone())
            .unwrap_or_default()
    }
}
