use anyhow::Result;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

use proctop::collector::ProcCounterSource;
use proctop::config::Config;
use proctop::format;
use proctop::system::{Snapshot, System};

fn render(snapshot: &Snapshot, system: &System, config: &Config) -> io::Result<()> {
    let mut out = io::stdout().lock();
    // Clear screen and move the cursor home
    write!(out, "\x1b[2J\x1b[H")?;
    if config.display.show_system {
        writeln!(out, "{} {}", system.os(), system.kernel())?;
        writeln!(
            out,
            "cpu {:5.1}%  mem {:5.1}%  procs {} ({} running)  up {}",
            snapshot.cpu_fraction * 100.0,
            snapshot.memory_fraction * 100.0,
            snapshot.total_processes,
            snapshot.running_processes,
            format::elapsed_time(snapshot.uptime_seconds),
        )?;
    }
    writeln!(
        out,
        "{:>7} {:<12} {:>6} {:>8} {:>9}  {}",
        "PID", "USER", "CPU%", "MEM MB", "TIME", "COMMAND"
    )?;
    for p in snapshot.processes.iter().take(config.display.max_rows) {
        let command: String = p.command.chars().take(60).collect();
        writeln!(
            out,
            "{:>7} {:<12} {:>6.1} {:>8} {:>9}  {}",
            p.pid,
            p.user,
            p.cpu_fraction * 100.0,
            p.memory_mb,
            format::elapsed_time(p.age_seconds),
            command,
        )?;
    }
    out.flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("proctop starting...");

    let config_path = Config::config_path();
    let config = if config_path.exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    let mut system = System::new(Box::new(ProcCounterSource::new()));

    // The first cycle measures utilization since boot; every later cycle
    // covers the interval since the previous one.
    loop {
        let snapshot = system.refresh();
        render(&snapshot, &system, &config)?;
        thread::sleep(Duration::from_secs(config.general.sample_interval_secs.max(1)));
    }
}
