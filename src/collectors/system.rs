//! OS identity and clock facts

use crate::config::Config;
use crate::data::HostIdentity;
use std::env;
use std::ffi::CStr;

const UNKNOWN: &str = "unknown";

/// Gather login, hostname, OS name and kernel release. Every source degrades
/// to a placeholder on failure; identity lookups are never fatal.
pub fn collect_identity(config: &Config) -> HostIdentity {
    HostIdentity {
        login: login_name(),
        hostname: hostname(),
        os_name: resolve_os_name(config),
        kernel_release: kernel_release(),
    }
}

fn hostname() -> String {
    let mut buf = [0u8; 256];
    // gethostname null-terminates for us as long as the buffer fits the
    // platform maximum, which 256 does on Linux
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return UNKNOWN.to_string();
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

fn kernel_release() -> String {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return UNKNOWN.to_string();
    }
    unsafe { CStr::from_ptr(uts.release.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

fn login_name() -> String {
    // getlogin returns NULL when there is no controlling terminal entry
    let name = unsafe { libc::getlogin() };
    if !name.is_null() {
        return unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
    }
    env::var("USER").unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Seconds since boot from the boot-relative clock, or `None` when the clock
/// is unavailable; the caller renders a zeroed uptime in that case.
pub fn boot_elapsed_secs() -> Option<u64> {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_BOOTTIME, &mut ts) };
    if rc != 0 || ts.tv_sec < 0 {
        return None;
    }
    Some(ts.tv_sec as u64)
}

fn resolve_os_name(config: &Config) -> String {
    if let Some(name) = config.display.os_name.as_deref().map(str::trim) {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    read_os_release_name().unwrap_or_else(|| "Linux".to_string())
}

fn read_os_release_name() -> Option<String> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    let file = File::open("/etc/os-release").ok()?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        if line.starts_with("PRETTY_NAME") {
            let value = line.find('=').map(|i| &line[i + 1..])?;
            return Some(value.trim().trim_matches('"').to_string());
        }
    }
}

/// Basename of the `SHELL` environment value; the full value when it holds no
/// path separator; `None` when the variable is absent entirely.
pub fn shell_name() -> Option<String> {
    env::var("SHELL").ok().map(|shell| shell_basename(&shell))
}

fn shell_basename(shell: &str) -> String {
    match shell.rfind('/') {
        Some(idx) => shell[idx + 1..].to_string(),
        None => shell.to_string(),
    }
}
