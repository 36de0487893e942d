//! Command execution utilities

use std::process::Command;

/// Longest first line we keep from a subprocess
const MAX_LINE_BYTES: usize = 255;

/// Run `command` through the shell and return the first line of its stdout,
/// truncated to `MAX_LINE_BYTES`. Blocks until the subprocess exits. `None`
/// when the shell cannot be spawned or the command prints nothing.
pub fn read_first_line(command: &str) -> Option<String> {
    let output = Command::new("sh").arg("-c").arg(command).output().ok()?;

    let line = output.stdout.split(|&b| b == b'\n').next()?;
    if line.is_empty() {
        return None;
    }
    let line = &line[..line.len().min(MAX_LINE_BYTES)];
    Some(String::from_utf8_lossy(line).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_only_the_first_line() {
        assert_eq!(
            read_first_line("printf 'one\\ntwo\\n'").as_deref(),
            Some("one")
        );
    }

    #[test]
    fn empty_output_is_none() {
        assert_eq!(read_first_line("true"), None);
    }

    #[test]
    fn failed_command_with_no_output_is_none() {
        assert_eq!(read_first_line("exit 3"), None);
    }

    #[test]
    fn long_line_is_truncated() {
        let line = read_first_line("printf '%0.sx' $(seq 1 400)").unwrap();
        assert_eq!(line.len(), MAX_LINE_BYTES);
    }
}
