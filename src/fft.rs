//! Forward FFT of real-valued signals
//!
//! The transform is the iterative form of the radix-2 decimation-in-time recursion. Conceptually
//! the input is `2^N` one-point DFTs (which are no-ops); pass `n` merges them pairwise into
//! `2^(N - n)` DFTs of length `2^n` until one full-length DFT remains. The bit reversal up front
//! lines the samples up so that every pass works on contiguous blocks.
use num_complex::Complex;
use num_traits::Float;

use crate::bit_reverse::bit_reverse_shuffle;
use crate::error::FftError;
use crate::kernels::butterfly_pass;
use crate::utils::combine_re_im;

/// Checks that `len == 2^log_n`.
fn validate_length(len: usize, log_n: u32) -> Result<(), FftError> {
    match 1usize.checked_shl(log_n) {
        Some(expected) if expected == len => Ok(()),
        _ => Err(FftError::InvalidLength { log_n, len }),
    }
}

/// Forward FFT of the real signal `input`, whose length must be exactly `2^log_n`.
///
/// Returns the full spectrum of `2^log_n` bins. For real input, bin `L - k` is the complex
/// conjugate of bin `k`; see [`non_redundant_half`] for the unique part.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `input.len() != 2^log_n`. Nothing is allocated or
/// computed in that case.
///
/// # Example
///
/// ```
/// use flicker_fft::forward_real_fft;
/// use num_complex::Complex;
///
/// let spectrum = forward_real_fft(&[1.0, 1.0, 1.0, 1.0], 2).unwrap();
/// assert_eq!(spectrum[0], Complex::new(4.0, 0.0));
/// ```
pub fn forward_real_fft<T: Float>(input: &[T], log_n: u32) -> Result<Vec<Complex<T>>, FftError> {
    let (reals, imags) = forward_real_fft_split(input, log_n)?;
    Ok(combine_re_im(&reals, &imags))
}

/// Same as [`forward_real_fft`], but hands back the real and imaginary components as two
/// separate vectors instead of packing them.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `input.len() != 2^log_n`.
pub fn forward_real_fft_split<T: Float>(
    input: &[T],
    log_n: u32,
) -> Result<(Vec<T>, Vec<T>), FftError> {
    validate_length(input.len(), log_n)?;

    let mut reals = input.to_vec();
    // The imaginary part of a real signal is all zeros, so it needs no shuffle.
    let mut imags = vec![T::zero(); reals.len()];

    bit_reverse_shuffle(&mut reals, log_n);
    fft_dit(&mut reals, &mut imags, log_n);

    Ok((reals, imags))
}

/// Runs merge passes `1..=log_n` over bit-reversed buffers. Pass `n` reads what pass `n - 1`
/// wrote, so the passes run strictly in order.
fn fft_dit<T: Float>(reals: &mut [T], imags: &mut [T], log_n: u32) {
    for n in 1..=log_n {
        butterfly_pass(reals, imags, 1 << n);
    }
}

/// The non-redundant bins `[0, L/2]` of the spectrum of a real signal.
pub fn non_redundant_half<T>(spectrum: &[Complex<T>]) -> &[Complex<T>] {
    let end = (spectrum.len() / 2 + 1).min(spectrum.len());
    &spectrum[..end]
}
