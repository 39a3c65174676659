//! Acceptance checks applied to every generated spectrum before its vectors are written out.
use std::fmt;

use flicker_fft::non_redundant_half;
use num_complex::{Complex32, Complex64};
use utilities::allclose;

/// Default tolerances of an elementwise closeness check.
const DEFAULT_RTOL: f64 = 1e-5;
const DEFAULT_ATOL: f64 = 1e-8;

/// Agreement required between `f64` and `f32` outputs.
const PRECISION_RTOL: f64 = 1e-2;
const PRECISION_ATOL: f64 = 1e-3;

/// Verdict for one waveform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// `spectrum[L - k]` is not the conjugate of `spectrum[k]`.
    NotSymmetrical,
    /// The `f64` spectrum differs from the reference transform.
    DoesNotMatchReference,
    /// The `f32` spectrum drifted too far from the `f64` one.
    PrecisionMismatch,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => "OK".fmt(f),
            Status::NotSymmetrical => "NOT SYMMETRICAL".fmt(f),
            Status::DoesNotMatchReference => "DOES NOT MATCH REFERENCE".fmt(f),
            Status::PrecisionMismatch => "32 DOES NOT MATCH 64".fmt(f),
        }
    }
}

/// Whether `spectrum[L - k] == conj(spectrum[k])` for every `k` in `1..L`.
pub fn is_conjugate_symmetric(spectrum: &[Complex64]) -> bool {
    if spectrum.len() < 2 {
        return true;
    }
    let mirrored: Vec<Complex64> = spectrum[1..].iter().rev().map(|z| z.conj()).collect();
    allclose(&mirrored, &spectrum[1..], DEFAULT_RTOL, DEFAULT_ATOL)
}

/// Runs every check on one waveform's results.
///
/// All checks run; when several fail, the last one in the order symmetry, reference,
/// precision is reported.
pub fn check_spectra(
    ours64: &[Complex64],
    ours32: &[Complex32],
    reference: &[Complex64],
) -> Status {
    let mut status = Status::Ok;

    if !is_conjugate_symmetric(ours64) {
        status = Status::NotSymmetrical;
    }

    if !allclose(
        non_redundant_half(ours64),
        non_redundant_half(reference),
        DEFAULT_RTOL,
        DEFAULT_ATOL,
    ) {
        status = Status::DoesNotMatchReference;
    }

    let widened: Vec<Complex64> = ours32
        .iter()
        .map(|z| Complex64::new(f64::from(z.re), f64::from(z.im)))
        .collect();
    if !allclose(ours64, &widened, PRECISION_RTOL, PRECISION_ATOL) {
        status = Status::PrecisionMismatch;
    }

    status
}

/// The tolerance the on-device test harness applies when comparing its output against the
/// generated vectors.
///
/// Each entry may be off by 0.001% of the largest expected magnitude, plus 0.1% of the two
/// values being compared.
pub fn harness_match(ours: &[f32], theirs: &[f32]) -> bool {
    if ours.len() != theirs.len() {
        return false;
    }

    let max = theirs.iter().fold(0.0f32, |max, x| max.max(x.abs()));
    let abs_margin = max / 100_000.0;

    ours.iter().zip(theirs.iter()).all(|(a, b)| {
        let rel_margin = (a.abs() + b.abs()) / 1000.0;
        (a - b).abs() <= abs_margin + rel_margin
    })
}

#[cfg(test)]
mod tests {
    use flicker_fft::forward_real_fft;
    use utilities::{gen_random_signal, reference_fft};

    use super::*;

    fn spectra(input: &[f64], log_n: u32) -> (Vec<Complex64>, Vec<Complex32>, Vec<Complex64>) {
        let narrowed: Vec<f32> = input.iter().map(|x| *x as f32).collect();
        (
            forward_real_fft(input, log_n).unwrap(),
            forward_real_fft(&narrowed, log_n).unwrap(),
            reference_fft(input),
        )
    }

    #[test]
    fn engine_output_passes() {
        let mut input = vec![0.0; 1024];
        gen_random_signal(&mut input, 3);
        let (ours64, ours32, reference) = spectra(&input, 10);

        assert_eq!(check_spectra(&ours64, &ours32, &reference), Status::Ok);
    }

    #[test]
    fn broken_symmetry_is_reported() {
        let mut input = vec![0.0; 64];
        gen_random_signal(&mut input, 4);
        let (mut ours64, _, _) = spectra(&input, 6);

        assert!(is_conjugate_symmetric(&ours64));
        ours64[5].im += 1.0;
        assert!(!is_conjugate_symmetric(&ours64));
    }

    #[test]
    fn reference_mismatch_is_reported() {
        let mut input = vec![0.0; 64];
        gen_random_signal(&mut input, 5);
        let (ours64, ours32, mut reference) = spectra(&input, 6);

        reference[3] *= 1.01;
        assert_eq!(
            check_spectra(&ours64, &ours32, &reference),
            Status::DoesNotMatchReference
        );
    }

    #[test]
    fn mismatch_in_redundant_half_of_reference_is_ignored() {
        let mut input = vec![0.0; 64];
        gen_random_signal(&mut input, 6);
        let (ours64, ours32, mut reference) = spectra(&input, 6);

        reference[40] = Complex64::new(1e6, 0.0);
        assert_eq!(check_spectra(&ours64, &ours32, &reference), Status::Ok);
    }

    #[test]
    fn precision_mismatch_wins() {
        let mut input = vec![0.0; 64];
        gen_random_signal(&mut input, 8);
        let (mut ours64, mut ours32, reference) = spectra(&input, 6);

        ours64[0].re += 1.0;
        ours32[0].re += 10.0;
        assert_eq!(
            check_spectra(&ours64, &ours32, &reference),
            Status::PrecisionMismatch
        );
    }

    #[test]
    fn harness_margin() {
        let theirs = [1000.0, 0.0, -3.0];
        assert!(harness_match(&[1000.5, 0.005, -3.002], &theirs));
        assert!(!harness_match(&[1000.0, 0.5, -3.0], &theirs));
        assert!(!harness_match(&[1000.0, 0.0], &theirs));
    }

    #[test]
    fn status_strings() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::PrecisionMismatch.to_string(), "32 DOES NOT MATCH 64");
    }
}
