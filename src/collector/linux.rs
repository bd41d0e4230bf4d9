use super::CounterSource;
use std::fs;

// Indices into the fields of /proc/<pid>/stat after the comm field
// (field 3 of the full line is index 0 here).
const STAT_UTIME: usize = 11;
const STAT_STIME: usize = 12;
const STAT_CUTIME: usize = 13;
const STAT_CSTIME: usize = 14;
const STAT_STARTTIME: usize = 19;

/// First eight values of the aggregate cpu line in /proc/stat.
#[derive(Debug, Clone, Copy, Default)]
struct CpuTimes {
    user: u64,
    nice: u64,
    system: u64,
    idle: u64,
    iowait: u64,
    irq: u64,
    softirq: u64,
    steal: u64,
}

pub struct ProcCounterSource {
    clock_ticks: u64,
}

impl ProcCounterSource {
    pub fn new() -> Self {
        let clock_ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        Self {
            clock_ticks: if clock_ticks > 0 {
                clock_ticks as u64
            } else {
                100
            },
        }
    }

    fn cpu_times() -> CpuTimes {
        let stat = fs::read_to_string("/proc/stat").unwrap_or_default();
        let Some(line) = stat.lines().find(|l| l.starts_with("cpu ")) else {
            return CpuTimes::default();
        };
        let mut fields = line
            .split_whitespace()
            .skip(1)
            .map(|f| f.parse::<u64>().unwrap_or(0));
        let mut next = || fields.next().unwrap_or(0);
        CpuTimes {
            user: next(),
            nice: next(),
            system: next(),
            idle: next(),
            iowait: next(),
            irq: next(),
            softirq: next(),
            steal: next(),
        }
    }

    fn stat_value(key: &str) -> u64 {
        let stat = fs::read_to_string("/proc/stat").unwrap_or_default();
        for line in stat.lines() {
            if let Some(rest) = line.strip_prefix(key) {
                return rest.trim().parse().unwrap_or(0);
            }
        }
        0
    }

    fn meminfo_kb(key: &str) -> u64 {
        let meminfo = fs::read_to_string("/proc/meminfo").unwrap_or_default();
        for line in meminfo.lines() {
            if let Some(rest) = line.strip_prefix(key) {
                return rest
                    .trim_start_matches(':')
                    .split_whitespace()
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
            }
        }
        0
    }

    /// Fields of /proc/<pid>/stat after the comm field. The comm field can
    /// itself contain spaces and parentheses, so the line is split after
    /// the last ')'. Non-numeric fields (the state char) parse to zero.
    fn pid_stat_fields(pid: u32) -> Vec<u64> {
        let stat = match fs::read_to_string(format!("/proc/{}/stat", pid)) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };
        let Some(pos) = stat.rfind(')') else {
            return Vec::new();
        };
        stat[pos + 1..]
            .split_whitespace()
            .map(|f| f.parse().unwrap_or(0))
            .collect()
    }

    fn status_value(pid: u32, key: &str) -> Option<u64> {
        let status = fs::read_to_string(format!("/proc/{}/status", pid)).ok()?;
        for line in status.lines() {
            if let Some(rest) = line.strip_prefix(key) {
                return rest
                    .trim_start_matches(':')
                    .split_whitespace()
                    .next()
                    .and_then(|v| v.parse().ok());
            }
        }
        None
    }

    fn user_for_uid(uid: u64) -> String {
        let passwd = fs::read_to_string("/etc/passwd").unwrap_or_default();
        for line in passwd.lines() {
            let mut fields = line.split(':');
            let name = fields.next().unwrap_or("");
            // name:password:uid:...
            if fields.nth(1).and_then(|v| v.parse::<u64>().ok()) == Some(uid) {
                return name.to_string();
            }
        }
        String::new()
    }
}

impl Default for ProcCounterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSource for ProcCounterSource {
    fn pids(&self) -> Vec<u32> {
        let mut pids = Vec::new();
        if let Ok(entries) = fs::read_dir("/proc") {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    if let Ok(pid) = name.parse::<u32>() {
                        pids.push(pid);
                    }
                }
            }
        }
        pids
    }

    fn system_active_ticks(&self) -> u64 {
        let t = Self::cpu_times();
        t.user + t.nice + t.system + t.idle + t.iowait + t.irq + t.softirq + t.steal
    }

    fn system_idle_ticks(&self) -> u64 {
        let t = Self::cpu_times();
        t.idle + t.iowait
    }

    fn system_uptime_seconds(&self) -> f64 {
        fs::read_to_string("/proc/uptime")
            .ok()
            .and_then(|s| {
                s.split_whitespace()
                    .next()
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or(0.0)
    }

    fn ticks_per_second(&self) -> u64 {
        self.clock_ticks
    }

    fn memory_total_kb(&self) -> u64 {
        Self::meminfo_kb("MemTotal")
    }

    fn memory_free_kb(&self) -> u64 {
        Self::meminfo_kb("MemFree")
    }

    fn total_processes(&self) -> u64 {
        Self::stat_value("processes")
    }

    fn running_processes(&self) -> u64 {
        Self::stat_value("procs_running")
    }

    fn kernel_version(&self) -> String {
        // "Linux version 6.1.0-13-amd64 (...)": the third token
        fs::read_to_string("/proc/version")
            .ok()
            .and_then(|s| s.split_whitespace().nth(2).map(str::to_string))
            .unwrap_or_default()
    }

    fn os_name(&self) -> String {
        let release = fs::read_to_string("/etc/os-release").unwrap_or_default();
        for line in release.lines() {
            if let Some(rest) = line.strip_prefix("PRETTY_NAME=") {
                return rest.trim_matches('"').to_string();
            }
        }
        String::new()
    }

    fn process_active_ticks(&self, pid: u32) -> u64 {
        let fields = Self::pid_stat_fields(pid);
        if fields.len() <= STAT_CSTIME {
            return 0;
        }
        fields[STAT_UTIME] + fields[STAT_STIME] + fields[STAT_CUTIME] + fields[STAT_CSTIME]
    }

    fn process_start_tick(&self, pid: u32) -> u64 {
        Self::pid_stat_fields(pid)
            .get(STAT_STARTTIME)
            .copied()
            .unwrap_or(0)
    }

    fn process_rss_kb(&self, pid: u32) -> u64 {
        Self::status_value(pid, "VmRSS").unwrap_or(0)
    }

    fn process_command(&self, pid: u32) -> String {
        fs::read_to_string(format!("/proc/{}/cmdline", pid))
            .unwrap_or_default()
            .replace('\0', " ")
            .trim()
            .to_string()
    }

    fn process_user(&self, pid: u32) -> String {
        Self::status_value(pid, "Uid")
            .map(Self::user_for_uid)
            .unwrap_or_default()
    }
}
