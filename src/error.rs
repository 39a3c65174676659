/// Errors the transform can return.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub enum FftError {
    /// The input length is not exactly `2^log_n`.
    InvalidLength {
        /// The exponent the caller asked for.
        log_n: u32,
        /// The length of the input that was passed.
        len: usize,
    },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { log_n, len } => match 1usize.checked_shl(*log_n) {
                Some(expected) => write!(
                    f,
                    "Invalid input length {len}, expected {expected} (2^{log_n})"
                ),
                None => write!(f, "Invalid input length {len}, 2^{log_n} is out of range"),
            },
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for FftError {}
