//! Butterfly kernels
//!
//! A merge pass with sub-length `2^n` combines every pair of adjacent length-`2^(n-1)` DFTs into
//! one length-`2^n` DFT. Both kernels below walk the buffers block by block; the step within a
//! block selects the twiddle factor, which is looked up from a table built once per pass.
use num_traits::Float;

use crate::twiddles::generate_pass_twiddles;

/// Runs one merge pass over `reals`/`imags`, producing DFTs of length `sub_length`.
///
/// The pairs touched by a pass are disjoint, so the order in which blocks are visited does not
/// affect the result.
pub(crate) fn butterfly_pass<T: Float>(reals: &mut [T], imags: &mut [T], sub_length: usize) {
    debug_assert_eq!(reals.len(), imags.len());
    debug_assert!(sub_length >= 2 && sub_length.is_power_of_two());
    debug_assert!(sub_length <= reals.len());

    if sub_length == 2 {
        fft_chunk_2(reals, imags);
    } else {
        let (twiddles_re, twiddles_im) = generate_pass_twiddles::<T>(sub_length);
        fft_chunk_n(reals, imags, &twiddles_re, &twiddles_im, sub_length >> 1);
    }
}

/// General butterfly: `A' = A + T*B`, `B' = A - T*B` for every pair in every block of size
/// `2 * dist`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_n<T: Float>(
    reals: &mut [T],
    imags: &mut [T],
    twiddles_re: &[T],
    twiddles_im: &[T],
    dist: usize,
) {
    let chunk_size = dist << 1;
    debug_assert_eq!(twiddles_re.len(), dist);
    debug_assert_eq!(twiddles_im.len(), dist);

    reals
        .chunks_exact_mut(chunk_size)
        .zip(imags.chunks_exact_mut(chunk_size))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (reals_s0, reals_s1) = reals_chunk.split_at_mut(dist);
            let (imags_s0, imags_s1) = imags_chunk.split_at_mut(dist);

            reals_s0
                .iter_mut()
                .zip(reals_s1.iter_mut())
                .zip(imags_s0.iter_mut())
                .zip(imags_s1.iter_mut())
                .zip(twiddles_re.iter())
                .zip(twiddles_im.iter())
                .for_each(|(((((re_s0, re_s1), im_s0), im_s1), w_re), w_im)| {
                    let a_re = *re_s0;
                    let a_im = *im_s0;
                    let b_re = *re_s1;
                    let b_im = *im_s1;

                    let tb_re = b_re * *w_re - b_im * *w_im;
                    let tb_im = b_im * *w_re + b_re * *w_im;

                    *re_s0 = a_re + tb_re;
                    *im_s0 = a_im + tb_im;
                    *re_s1 = a_re - tb_re;
                    *im_s1 = a_im - tb_im;
                });
        });
}

/// `chunk_size == 2`, the only twiddle factor is `1`
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_2<T: Float>(reals: &mut [T], imags: &mut [T]) {
    reals
        .chunks_exact_mut(2)
        .zip(imags.chunks_exact_mut(2))
        .for_each(|(reals_chunk, imags_chunk)| {
            let z0_re = reals_chunk[0];
            let z0_im = imags_chunk[0];
            let z1_re = reals_chunk[1];
            let z1_im = imags_chunk[1];

            reals_chunk[0] = z0_re + z1_re;
            imags_chunk[0] = z0_im + z1_im;
            reals_chunk[1] = z0_re - z1_re;
            imags_chunk[1] = z0_im - z1_im;
        });
}
