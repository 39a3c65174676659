use std::env;
use std::process::ExitCode;

use harness::checks::Status;
use harness::drivers::generate_test_vectors;
use harness::{Config, HarnessError};

fn main() -> Result<ExitCode, HarnessError> {
    let config = Config::from_args(env::args().skip(1)).map_err(|e| {
        eprintln!("Usage: fft-test-gen [<exponent>] [<output dir>]");
        e
    })?;

    let reports = generate_test_vectors(&config)?;

    let mut failed = false;
    for report in &reports {
        let note = if report.harness_ok { "" } else { " (outside harness tolerance)" };
        println!(
            "{}: {}{} -> {}",
            report.waveform.name(),
            report.status,
            note,
            report.path.display()
        );
        failed |= report.status != Status::Ok || !report.harness_ok;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
