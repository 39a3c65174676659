use std::io;

use flicker_fft::FftError;

/// Errors the drivers can return.
pub enum HarnessError {
    /// Reading arguments or writing an output file failed.
    Io(io::Error),
    /// The engine rejected its input.
    Fft(FftError),
    /// A command line argument could not be used.
    InvalidArgument(String),
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FftError> for HarnessError {
    fn from(e: FftError) -> Self {
        Self::Fft(e)
    }
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Fft(e) => write!(f, "FFT error: {e}"),
            Self::InvalidArgument(arg) => write!(f, "Invalid argument: {arg}"),
        }
    }
}

// `main` returning `Err` prints the `Debug` form, keep it readable.
impl std::fmt::Debug for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Fft(e) => Some(e),
            Self::InvalidArgument(_) => None,
        }
    }
}
