use dirs::config_dir;
use serde::Deserialize;
use std::{collections::HashMap, fs};

use crate::error::{FetchError, Result};

/// Number of logo rows the renderer lays stat lines beside
pub const LOGO_ROWS: usize = 8;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub colors: HashMap<String, String>,
    pub logo: LogoConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_host: bool,
    pub show_os: bool,
    pub show_kernel: bool,
    pub show_uptime: bool,
    pub show_packages: bool,
    pub show_shell: bool,
    pub show_memory: bool,
    pub show_colors: bool,

    pub os_label: String,
    pub kernel_label: String,
    pub uptime_label: String,
    pub package_label: String,
    pub shell_label: String,
    pub memory_label: String,
    pub separator: String,

    pub user_color: String,
    pub at_color: String,
    pub host_color: String,
    pub label_color: String,
    pub value_color: String,
    pub logo_color: String,

    /// Shell pipeline whose first stdout line becomes the package count
    pub package_command: String,
    /// Overrides the /etc/os-release name when set
    pub os_name: Option<String>,
    pub swatch_char: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_host: true,
            show_os: true,
            show_kernel: true,
            show_uptime: true,
            show_packages: true,
            show_shell: true,
            show_memory: true,
            show_colors: true,
            os_label: "os".to_string(),
            kernel_label: "kernel".to_string(),
            uptime_label: "uptime".to_string(),
            package_label: "pkgs".to_string(),
            shell_label: "shell".to_string(),
            memory_label: "memory".to_string(),
            separator: "  ".to_string(),
            user_color: "bright_yellow".to_string(),
            at_color: "bright_red".to_string(),
            host_color: "bright_blue".to_string(),
            label_color: "bright_blue".to_string(),
            value_color: "white".to_string(),
            logo_color: "bright_cyan".to_string(),
            package_command: "pacman -Q | wc -l".to_string(),
            os_name: None,
            swatch_char: "●".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogoConfig {
    /// Literal art rows; padded or cut to `LOGO_ROWS` by the renderer
    pub rows: Vec<String>,
    /// External art file, tilde-expanded; takes precedence over `rows`
    pub path: Option<String>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        LogoConfig {
            rows: DEFAULT_LOGO.lines().map(String::from).collect(),
            path: None,
        }
    }
}

const DEFAULT_LOGO: &str = r"    .---.
   /     \
   \.@-@./
   /`\_/`\
  //  _  \\
 | \     )|_
/`\_`>  <_/ \
\__/'---'\__/";

/// Load the user config, falling back to built-in defaults when no file exists
pub fn load_config() -> Result<Config> {
    let path = config_dir().map(|p| p.join("picofetch/config.toml"));

    match path {
        Some(path) if path.exists() => {
            let data = fs::read_to_string(&path)?;
            toml::de::from_str(&data).map_err(|e| FetchError::Config(e.to_string()))
        }
        _ => Ok(Config::default()),
    }
}

/// Resolve the logo rows: external file if configured and readable, else the
/// inline rows. Always exactly `LOGO_ROWS` entries.
pub fn load_logo_rows(config: &Config) -> Vec<String> {
    let mut rows = match config.logo.path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            match fs::read_to_string(&expanded) {
                Ok(art) => art.lines().take(LOGO_ROWS).map(String::from).collect(),
                Err(_) => {
                    eprintln!("Warning: could not read logo file '{}'", expanded);
                    config.logo.rows.iter().take(LOGO_ROWS).cloned().collect()
                }
            }
        }
        None => config.logo.rows.iter().take(LOGO_ROWS).cloned().collect::<Vec<_>>(),
    };
    rows.resize(LOGO_ROWS, String::new());
    rows
}
