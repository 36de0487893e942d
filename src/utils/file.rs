//! File reading utilities

use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read at most `limit` bytes from the head of a file into an owned buffer.
/// Enough for the fixed-order proc files we scan; anything past the limit is
/// deliberately dropped.
pub fn read_head<P: AsRef<Path>>(path: P, limit: usize) -> Result<String> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
