use std::io::{self, Write};
use std::process::ExitCode;

use interview::{selftest, suite};

pub fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = selftest::run(&suite::all(), &mut out).and_then(|_| out.flush()) {
        eprintln!("Failed to write report: {}", e);
    }
    ExitCode::SUCCESS
}
