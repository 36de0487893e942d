//! /proc/meminfo parsing

use crate::data::MemorySample;
use crate::error::{FetchError, Result};

/// meminfo labels in their guaranteed file order
const MEM_TOTAL: &str = "MemTotal:";
const MEM_FREE: &str = "MemFree:";
const MEM_AVAILABLE: &str = "MemAvailable:";
const BUFFERS: &str = "Buffers:";
const CACHED: &str = "Cached:";
const SHMEM: &str = "Shmem:";
const S_RECLAIMABLE: &str = "SReclaimable:";

/// Extract a memory sample from raw meminfo text.
///
/// The kernel emits these fields in a fixed order, so each label is searched
/// for starting at the previous match rather than re-scanning the whole blob.
/// A label that is absent, or whose value does not parse, is fatal: a wrong
/// memory figure would misrepresent the system, so nothing is defaulted here.
pub fn parse_meminfo(raw: &str) -> Result<MemorySample> {
    let mut scan = Scanner { raw, pos: 0 };

    let total = scan.field(MEM_TOTAL)?;
    let free = scan.field(MEM_FREE)?;
    // Located to keep the scan anchored in file order; not part of the sum
    let _available = scan.field(MEM_AVAILABLE)?;
    let buffers = scan.field(BUFFERS)?;
    let cached = scan.field(CACHED)?;
    let shmem = scan.field(SHMEM)?;
    let s_reclaimable = scan.field(S_RECLAIMABLE)?;

    let used = (total + shmem).saturating_sub(free + buffers + cached + s_reclaimable);

    Ok(MemorySample {
        used_kb: used,
        total_kb: total,
    })
}

struct Scanner<'a> {
    raw: &'a str,
    pos: usize,
}

impl Scanner<'_> {
    /// Find `label` at or after the current position and parse the first
    /// whitespace-delimited token after it. Advances the position to the match.
    fn field(&mut self, label: &'static str) -> Result<u64> {
        let offset = self.raw[self.pos..]
            .find(label)
            .ok_or(FetchError::MissingField(label))?;
        self.pos += offset;

        let rest = &self.raw[self.pos + label.len()..];
        rest.split_whitespace()
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or(FetchError::MissingField(label))
    }
}
