//! Raw counter access (reads /proc on Linux)

mod linux;

pub use linux::ProcCounterSource;

/// Cumulative tick counters and static facts the sampling engine pulls
/// each cycle.
///
/// System counters are monotonically non-decreasing for the lifetime of
/// the machine; wrap on overflow is a known limitation and not handled.
/// Every read degrades to zero or an empty string when the underlying
/// data is gone (a pid that exited between listing and reading, a field
/// denied by permissions). No method returns an error.
pub trait CounterSource: Send + Sync {
    /// Current snapshot of live process ids. Empty when enumeration fails.
    fn pids(&self) -> Vec<u32>;

    /// System-wide ticks across all activity categories:
    /// user + nice + system + idle + iowait + irq + softirq + steal.
    fn system_active_ticks(&self) -> u64;

    /// System-wide idle ticks: idle + iowait.
    fn system_idle_ticks(&self) -> u64;

    /// Seconds since boot.
    fn system_uptime_seconds(&self) -> f64;

    /// Kernel clock ticks per second (USER_HZ).
    fn ticks_per_second(&self) -> u64;

    fn memory_total_kb(&self) -> u64;

    fn memory_free_kb(&self) -> u64;

    fn total_processes(&self) -> u64;

    fn running_processes(&self) -> u64;

    fn kernel_version(&self) -> String;

    fn os_name(&self) -> String;

    /// Ticks the process has spent on CPU, including reaped children.
    /// Zero when the pid has already exited.
    fn process_active_ticks(&self, pid: u32) -> u64;

    /// Tick count at which the process started, relative to boot.
    fn process_start_tick(&self, pid: u32) -> u64;

    fn process_rss_kb(&self, pid: u32) -> u64;

    /// Point-in-time command line read; legitimately empty for a process
    /// that exited before the read completed.
    fn process_command(&self, pid: u32) -> String;

    fn process_user(&self, pid: u32) -> String;
}
