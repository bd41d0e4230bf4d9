//! Process and CPU sampling engine for a live terminal monitor.
//!
//! Raw tick counters come in through the [`collector::CounterSource`] seam,
//! the engine derives per-process and system-wide utilization from deltas
//! between consecutive samples, and every cycle produces an ordered snapshot
//! for display. The binary owns the sampling cadence; the engine itself is
//! synchronous and pull-based.

pub mod collector;
pub mod config;
pub mod cpu;
pub mod format;
pub mod process;
pub mod system;
pub mod table;
