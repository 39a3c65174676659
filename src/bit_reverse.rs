//! Bit reversal permutation
//!
//! The decimation-in-time FFT consumes its input in bit-reversed order. Rather than splitting the
//! signal into even and odd halves at every level of the recursion, the whole buffer is reordered
//! once up front, after which every merge pass works on contiguous blocks.

/// Reverses the lowest `log_n` bits of `index`.
///
/// `index` must be less than `2^log_n`. The mapping is an involution: reversing twice gives back
/// the original index.
#[inline]
pub fn reverse_bits(index: usize, log_n: u32) -> usize {
    debug_assert!(log_n < usize::BITS);
    debug_assert!(index >> log_n == 0, "index {index} does not fit in {log_n} bits");

    if log_n == 0 {
        return index;
    }
    index.reverse_bits() >> (usize::BITS - log_n)
}

/// Reorders `buf` in place so that `buf[i]` and `buf[reverse_bits(i, log_n)]` trade places.
///
/// Every pair is swapped exactly once; fixed points such as `0` and `2^log_n - 1` are never
/// touched. Applying the shuffle twice restores the original order.
///
/// # Panics
///
/// Panics if `buf.len() != 2^log_n`.
pub fn bit_reverse_shuffle<T>(buf: &mut [T], log_n: u32) {
    assert_eq!(
        Some(buf.len()),
        1usize.checked_shl(log_n),
        "buffer length must be 2^{log_n}"
    );

    for i in 0..buf.len() {
        let j = reverse_bits(i, log_n);
        if i < j {
            buf.swap(i, j);
        }
    }
}
