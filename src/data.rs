//! Plain data records gathered once per run

/// Whole days/hours/minutes since boot, truncated to minute granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Uptime {
    /// Split a boot-relative elapsed-seconds value into days/hours/minutes.
    /// Defined for every input; zero seconds gives the all-zero triple.
    pub fn from_elapsed_secs(secs: u64) -> Self {
        Uptime {
            days: secs / 86400,
            hours: (secs / 3600) % 24,
            minutes: (secs / 60) % 60,
        }
    }
}

/// Used/total memory in kilobytes as accounted by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySample {
    pub used_kb: u64,
    pub total_kb: u64,
}

impl MemorySample {
    pub fn used_mb(&self) -> u64 {
        self.used_kb / 1024
    }

    pub fn total_mb(&self) -> u64 {
        self.total_kb / 1024
    }

    /// Used memory as a floor percentage of total; 0 when total is 0
    pub fn used_percent(&self) -> u64 {
        if self.total_kb == 0 {
            0
        } else {
            self.used_kb * 100 / self.total_kb
        }
    }
}

/// Who and what this host is, sourced once per run
#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub login: String,
    pub hostname: String,
    pub os_name: String,
    pub kernel_release: String,
}

/// The fully resolved set of host facts, built once and consumed by rendering
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub identity: HostIdentity,
    pub uptime: Uptime,
    pub memory: MemorySample,
    /// First stdout line of the configured package-count command, if any
    pub package_count: Option<String>,
    /// Basename of $SHELL; `None` when the variable is absent
    pub shell_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_zero_seconds() {
        assert_eq!(
            Uptime::from_elapsed_secs(0),
            Uptime {
                days: 0,
                hours: 0,
                minutes: 0
            }
        );
    }

    #[test]
    fn uptime_one_of_each() {
        // 1 day, 1 hour, 1 minute, 1 second; the second truncates away
        assert_eq!(
            Uptime::from_elapsed_secs(90061),
            Uptime {
                days: 1,
                hours: 1,
                minutes: 1
            }
        );
    }

    #[test]
    fn uptime_just_under_an_hour() {
        assert_eq!(
            Uptime::from_elapsed_secs(3599),
            Uptime {
                days: 0,
                hours: 0,
                minutes: 59
            }
        );
    }

    #[test]
    fn uptime_reconstructs_to_minute_granularity() {
        for secs in [59u64, 60, 3600, 86400, 90061, 1234567] {
            let up = Uptime::from_elapsed_secs(secs);
            let rebuilt = up.days * 86400 + up.hours * 3600 + up.minutes * 60;
            assert_eq!(rebuilt, secs - secs % 60);
        }
    }

    #[test]
    fn memory_percent_floors() {
        let mem = MemorySample {
            used_kb: 4_600_000,
            total_kb: 16_000_000,
        };
        assert_eq!(mem.used_percent(), 28);
        assert_eq!(mem.used_mb(), 4492);
        assert_eq!(mem.total_mb(), 15625);
    }

    #[test]
    fn memory_percent_zero_total() {
        let mem = MemorySample {
            used_kb: 0,
            total_kb: 0,
        };
        assert_eq!(mem.used_percent(), 0);
    }
}
