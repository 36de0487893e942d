//! picofetch library
//!
//! A tiny single-shot system information fetch tool: gather a snapshot of
//! host facts, print it beside an ASCII logo, exit.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod utils;

pub use data::{HostIdentity, MemorySample, Snapshot, Uptime};
pub use error::{FetchError, Result};

/// How much of /proc/meminfo we read; the fields we need all sit in the head
const MEMINFO_PATH: &str = "/proc/meminfo";
const MEMINFO_READ_LIMIT: usize = 1024;

/// Gather every host fact into one immutable snapshot.
///
/// A meminfo read or parse failure is the only error that propagates; the
/// other sources degrade in place (absent package count, zeroed uptime,
/// placeholder identity fields) so a partial host still renders.
pub fn collect_snapshot(config: &config::Config) -> Result<Snapshot> {
    let raw = utils::file::read_head(MEMINFO_PATH, MEMINFO_READ_LIMIT)?;
    let memory = collectors::memory::parse_meminfo(&raw)?;

    Ok(Snapshot {
        identity: collectors::system::collect_identity(config),
        uptime: Uptime::from_elapsed_secs(collectors::system::boot_elapsed_secs().unwrap_or(0)),
        memory,
        package_count: collectors::packages::package_count(config),
        shell_name: collectors::system::shell_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_collects_on_a_real_host() {
        let mut config = config::Config::default();
        // Deterministic stand-in for a real package manager query
        config.display.package_command = "echo 42".to_string();

        let snapshot = collect_snapshot(&config).unwrap();
        assert!(snapshot.memory.total_kb > 0);
        assert!(snapshot.memory.used_kb <= snapshot.memory.total_kb);
        assert_eq!(snapshot.package_count.as_deref(), Some("42"));
        assert!(!snapshot.identity.hostname.is_empty());
    }
}
