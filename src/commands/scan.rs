use std::io;
use std::path::PathBuf;

use crate::error::AppError;
use crate::report::Report;
use crate::scanner::Scanner;

pub struct ScanOptions {
    pub directory: PathBuf,
}

pub fn execute_scan(options: ScanOptions) -> Result<Report, AppError> {
    let scanner = Scanner::new(options.directory);
    let report = scanner.scan()?;

    print_report(&report)?;
    Ok(report)
}

fn print_report(report: &Report) -> Result<(), AppError> {
    let stdout = io::stdout();
    report.render(stdout.lock())?;
    Ok(())
}
