//! Terminal rendering: logo block plus cursor-positioned stat lines

use crate::config::{Config, LOGO_ROWS};
use crate::data::{Snapshot, Uptime};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
/// Placeholder when $SHELL is absent from the environment
const SHELL_FALLBACK: &str = "unknown";
/// Blank cells between the logo block and the stat column
const LOGO_GUTTER: usize = 2;

/// One stat line: the raw bytes to emit plus the display width of the text
/// cells only. Escape sequences land in the buffer without touching the
/// width, so `visible` is exactly how far the cursor travels and the
/// trailing cursor-left move cancels it regardless of which colors are on.
struct StatLine {
    buf: String,
    visible: usize,
    // The color swatch row ends in a newline instead of cursor moves
    swatch: bool,
}

impl StatLine {
    fn new() -> Self {
        StatLine {
            buf: String::new(),
            visible: 0,
            swatch: false,
        }
    }

    fn text(&mut self, s: &str) {
        self.buf.push_str(s);
        self.visible += UnicodeWidthStr::width(s);
    }

    fn escape(&mut self, seq: &str) {
        self.buf.push_str(seq);
    }
}

/// Print the logo block, then reposition the cursor and lay every enabled
/// stat line beside its logo row. The snapshot is already fully resolved;
/// the only failure mode left is the output stream itself.
pub fn render<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    config: &Config,
    logo_rows: &[String],
) -> io::Result<()> {
    let logo_color = resolve_color(config, &config.display.logo_color);
    let width = logo_rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.as_str()))
        .max()
        .unwrap_or(0)
        + LOGO_GUTTER;

    for (i, row) in logo_rows.iter().enumerate() {
        let pad = width - UnicodeWidthStr::width(row.as_str());
        write!(out, "{}{}{}", logo_color, row, " ".repeat(pad))?;
        if i + 1 < logo_rows.len() {
            out.write_all(b"\n")?;
        }
    }
    // Cursor now sits at the stat column on the last logo row

    let lines = stat_lines(snapshot, config);
    let up = lines.len().min(LOGO_ROWS - 1);
    if up > 0 {
        write!(out, "\x1b[{}A", up)?;
    }

    let mut remaining = up;
    for line in &lines {
        out.write_all(line.buf.as_bytes())?;
        if line.swatch {
            out.write_all(b"\n")?;
        } else {
            if line.visible > 0 {
                write!(out, "\x1b[{}D", line.visible)?;
            }
            out.write_all(b"\x1b[1B")?;
        }
        remaining = remaining.saturating_sub(1);
    }

    // Consume any logo rows still below the last stat line
    if remaining > 0 {
        write!(out, "\x1b[{}B", remaining)?;
    }
    write!(out, "{}", RESET)?;
    out.write_all(b"\n")
}

fn stat_lines(snapshot: &Snapshot, config: &Config) -> Vec<StatLine> {
    let d = &config.display;
    let label_color = resolve_color(config, &d.label_color);
    let value_color = resolve_color(config, &d.value_color);

    let labeled = |label: &str, value: &str| {
        let mut line = StatLine::new();
        line.escape(&label_color);
        line.text(label);
        line.text(&d.separator);
        line.escape(&value_color);
        line.text(value);
        line
    };

    let mut lines = Vec::new();

    if d.show_host {
        let mut line = StatLine::new();
        line.escape(&resolve_color(config, &d.user_color));
        line.text(&snapshot.identity.login);
        line.escape(&resolve_color(config, &d.at_color));
        line.text("@");
        line.escape(&resolve_color(config, &d.host_color));
        line.text(&snapshot.identity.hostname);
        lines.push(line);
    }
    if d.show_os {
        lines.push(labeled(&d.os_label, &snapshot.identity.os_name));
    }
    if d.show_kernel {
        lines.push(labeled(&d.kernel_label, &snapshot.identity.kernel_release));
    }
    if d.show_uptime {
        lines.push(labeled(&d.uptime_label, &format_uptime(&snapshot.uptime)));
    }
    if d.show_packages {
        lines.push(labeled(
            &d.package_label,
            snapshot.package_count.as_deref().unwrap_or(""),
        ));
    }
    if d.show_shell {
        lines.push(labeled(
            &d.shell_label,
            snapshot.shell_name.as_deref().unwrap_or(SHELL_FALLBACK),
        ));
    }
    if d.show_memory {
        let mem = &snapshot.memory;
        let value = format!(
            "{}/{} MB ({}%)",
            mem.used_mb(),
            mem.total_mb(),
            mem.used_percent()
        );
        lines.push(labeled(&d.memory_label, &value));
    }
    if d.show_colors {
        let mut line = StatLine::new();
        for sgr in 31..37 {
            line.escape(&format!("\x1b[0;{}m", sgr));
            line.text(&d.swatch_char);
        }
        line.swatch = true;
        lines.push(line);
    }

    lines
}

fn format_uptime(up: &Uptime) -> String {
    let mut out = String::new();
    if up.days > 0 {
        out.push_str(&format!("{}d ", up.days));
    }
    if up.hours > 0 {
        out.push_str(&format!("{}h ", up.hours));
    }
    out.push_str(&format!("{}m", up.minutes));
    out
}

/// Look a color role up in the user palette, then interpret the result as an
/// ANSI color name or `#rrggbb` hex value.
pub fn resolve_color(config: &Config, name: &str) -> String {
    let spec = config.colors.get(name).map(String::as_str).unwrap_or(name);
    color_code(spec)
}

fn color_code(spec: &str) -> String {
    if let Some(code) = ansi_color_code(spec) {
        return code;
    }
    if spec.starts_with('#') && spec.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&spec[1..3], 16),
            u8::from_str_radix(&spec[3..5], 16),
            u8::from_str_radix(&spec[5..7], 16),
        ) {
            return format!("\x1b[38;2;{};{};{}m", r, g, b);
        }
    }
    eprintln!("Warning: unknown color '{}', using terminal default", spec);
    RESET.to_string()
}

fn ansi_color_code(name: &str) -> Option<String> {
    let sgr = match name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" | "purple" => 35,
        "cyan" => 36,
        "white" => 37,
        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => 90,
        "bright_red" | "orange" => 91,
        "bright_green" => 92,
        "bright_yellow" => 93,
        "bright_blue" => 94,
        "bright_magenta" | "violet" => 95,
        "bright_cyan" => 96,
        "bright_white" => 97,
        "reset" | "default" => 0,
        _ => return None,
    };
    Some(format!("\x1b[{}m", sgr))
}
