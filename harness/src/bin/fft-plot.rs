use std::env;
use std::io;
use std::process::ExitCode;

use harness::checks::Status;
use harness::drivers::plot_spectra;
use harness::{Config, HarnessError};

fn main() -> Result<ExitCode, HarnessError> {
    let config = Config::from_args(env::args().skip(1)).map_err(|e| {
        eprintln!("Usage: fft-plot [<exponent>] | <.vz viewer>");
        e
    })?;

    let stdout = io::stdout();
    let statuses = plot_spectra(&config, &mut stdout.lock())?;

    // stdout carries the chart stream, so statuses go to stderr.
    for (waveform, status) in &statuses {
        eprintln!("{}: {}", waveform.name(), status);
    }

    Ok(if statuses.iter().all(|(_, status)| *status == Status::Ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
