use std::f64::consts::PI;

use num_traits::Float;

/// Computes the twiddle factor `e^(-2 * pi * i * step / sub_length)` as `(cos, sin)`.
///
/// Always evaluated in `f64`, so rounding in the factors does not depend on the precision of the
/// buffers they are later applied to.
#[inline]
pub fn twiddle(step: usize, sub_length: usize) -> (f64, f64) {
    debug_assert!(sub_length >= 2 && sub_length.is_power_of_two());
    debug_assert!(step < sub_length / 2);

    let angle = -2.0 * PI * (step as f64) / (sub_length as f64);
    let (sin, cos) = angle.sin_cos();
    (cos, sin)
}

/// Builds the twiddle table for the merge pass with the given `sub_length`.
///
/// There is one entry per step, `sub_length / 2` in total, each computed exactly once and
/// narrowed to `T`. The pass reuses every entry across all of its block offsets.
pub(crate) fn generate_pass_twiddles<T: Float>(sub_length: usize) -> (Vec<T>, Vec<T>) {
    let dist = sub_length >> 1;
    let mut twiddles_re = vec![T::zero(); dist];
    let mut twiddles_im = vec![T::zero(); dist];

    twiddles_re
        .iter_mut()
        .zip(twiddles_im.iter_mut())
        .enumerate()
        .for_each(|(step, (re, im))| {
            let (cos, sin) = twiddle(step, sub_length);
            *re = T::from(cos).unwrap();
            *im = T::from(sin).unwrap();
        });

    (twiddles_re, twiddles_im)
}
