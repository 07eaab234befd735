use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirscan::commands::execute_scan;
use dirscan::commands::scan::ScanOptions;
use dirscan::error::AppError;
use tracing::Level;

const USAGE: &str = "Incorrect args.\nRun example: dirscan /path/to/directory";

fn main() {
    // Anything other than exactly one argument is a usage error.
    let Ok(cli) = Cli::try_parse() else {
        println!("{USAGE}");
        process::exit(2);
    };

    init_tracing();

    if let Err(err) = run(cli) {
        println!("got error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let options = ScanOptions { directory: cli.directory };
    execute_scan(options)?;
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(name = "dirscan", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Directory whose immediate entries are listed. Taken verbatim, even
    /// when it starts with a hyphen.
    #[arg(value_name = "DIRECTORY", allow_hyphen_values = true)]
    directory: PathBuf,
}
