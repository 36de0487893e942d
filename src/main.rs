use std::io::{self, Write};
use std::process;

use picofetch::{collect_snapshot, config, display};

fn main() {
    if let Err(err) = run() {
        eprintln!("picofetch: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    let snapshot = collect_snapshot(&config)?;
    let logo_rows = config::load_logo_rows(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    display::render(&mut out, &snapshot, &config, &logo_rows)?;
    out.flush()?;
    Ok(())
}
