//! The two drivers: one writes C test vectors, the other emits magnitude plots.
//!
//! Both run every [`Waveform`] through the same comparison: the engine at `f64` and `f32` next
//! to the reference transform.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use flicker_fft::{forward_real_fft, forward_real_fft_split, non_redundant_half};
use num_complex::{Complex32, Complex64};
use utilities::reference_fft;

use crate::checks::{check_spectra, harness_match, Status};
use crate::config::Config;
use crate::error::HarnessError;
use crate::header::{header_path, write_test_header};
use crate::plot::{magnitudes, write_chart};
use crate::waveforms::Waveform;

/// Outcome of generating the vectors for one waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub waveform: Waveform,
    pub status: Status,
    /// Whether the written `f32` vectors pass the on-device tolerance against the `f64` result.
    pub harness_ok: bool,
    pub path: PathBuf,
}

/// Engine and reference outputs for one waveform.
struct Comparison {
    input32: Vec<f32>,
    reference: Vec<Complex64>,
    ours64: Vec<Complex64>,
    real32: Vec<f32>,
    imag32: Vec<f32>,
    ours32: Vec<Complex32>,
    status: Status,
}

fn compare(waveform: Waveform, config: &Config) -> Result<Comparison, HarnessError> {
    let input = waveform.samples(config.num_samples()?);
    let input32: Vec<f32> = input.iter().map(|x| *x as f32).collect();

    let reference = reference_fft(&input);
    let ours64 = forward_real_fft(&input, config.exponent)?;
    let (real32, imag32) = forward_real_fft_split(&input32, config.exponent)?;
    let ours32: Vec<Complex32> = real32
        .iter()
        .zip(imag32.iter())
        .map(|(re, im)| Complex32::new(*re, *im))
        .collect();
    let status = check_spectra(&ours64, &ours32, &reference);

    Ok(Comparison {
        input32,
        reference,
        ours64,
        real32,
        imag32,
        ours32,
        status,
    })
}

/// Writes `fft-test-{name}.h` for every waveform into `config.output_dir`.
///
/// The headers carry the `f32` results, the precision the on-device tests run at.
pub fn generate_test_vectors(config: &Config) -> Result<Vec<Report>, HarnessError> {
    fs::create_dir_all(&config.output_dir)?;

    Waveform::ALL
        .iter()
        .map(|&waveform| {
            let comparison = compare(waveform, config)?;

            let real64: Vec<f32> = comparison.ours64.iter().map(|z| z.re as f32).collect();
            let imag64: Vec<f32> = comparison.ours64.iter().map(|z| z.im as f32).collect();
            let harness_ok = harness_match(&comparison.real32, &real64)
                && harness_match(&comparison.imag32, &imag64);

            let path = header_path(&config.output_dir, waveform.name());
            let mut out = BufWriter::new(File::create(&path)?);
            write_test_header(
                &mut out,
                waveform.name(),
                &comparison.input32,
                &comparison.real32,
                &comparison.imag32,
            )?;
            out.flush()?;

            Ok(Report {
                waveform,
                status: comparison.status,
                harness_ok,
                path,
            })
        })
        .collect()
}

/// Emits, for every waveform, a chart of the reference and engine magnitudes over the
/// non-redundant bins. Returns each waveform's status.
pub fn plot_spectra<W: Write>(
    config: &Config,
    out: &mut W,
) -> Result<Vec<(Waveform, Status)>, HarnessError> {
    let mut statuses = Vec::with_capacity(Waveform::ALL.len());

    for waveform in Waveform::ALL {
        let comparison = compare(waveform, config)?;

        let reference = magnitudes(non_redundant_half(&comparison.reference));
        let ours = magnitudes(non_redundant_half(&comparison.ours64));
        let ours32: Vec<f64> = non_redundant_half(&comparison.ours32)
            .iter()
            .map(|z| f64::from(z.norm()))
            .collect();

        let chart_name = format!("{} - {}", waveform.name(), comparison.status);
        write_chart(
            out,
            &chart_name,
            &[
                ("reference", &reference[..]),
                ("f64", &ours[..]),
                ("f32", &ours32[..]),
            ],
        )?;

        statuses.push((waveform, comparison.status));
    }

    out.flush()?;
    Ok(statuses)
}
