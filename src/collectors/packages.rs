//! Package count lookup

use crate::config::Config;
use crate::utils::command;

/// First stdout line of the configured package-count command. A blank command,
/// a spawn failure or silent output all render the line without a value; the
/// count is never worth failing the run over.
pub fn package_count(config: &Config) -> Option<String> {
    let cmd = config.display.package_command.trim();
    if cmd.is_empty() {
        return None;
    }
    command::read_first_line(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_command_is_none() {
        let mut config = Config::default();
        config.display.package_command = "  ".to_string();
        assert_eq!(package_count(&config), None);
    }

    #[test]
    fn command_output_is_captured() {
        let mut config = Config::default();
        config.display.package_command = "echo 1234".to_string();
        assert_eq!(package_count(&config).as_deref(), Some("1234"));
    }
}
