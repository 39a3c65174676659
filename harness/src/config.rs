use std::path::PathBuf;
use std::str::FromStr;

use crate::error::HarnessError;

/// Transform size used when none is given on the command line: 4096 samples.
pub const DEFAULT_EXPONENT: u32 = 12;

/// Settings shared by both drivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Every waveform has `2^exponent` samples.
    pub exponent: u32,
    /// Where generated headers are written.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Builds a config from positional arguments `[<exponent>] [<output dir>]`, program name
    /// already stripped. Missing arguments keep their defaults.
    pub fn from_args<I>(args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(exponent) = args.next() {
            config.exponent = u32::from_str(&exponent).map_err(|e| {
                HarnessError::InvalidArgument(format!("exponent {exponent:?}: {e}"))
            })?;
        }
        if let Some(output_dir) = args.next() {
            config.output_dir = PathBuf::from(output_dir);
        }
        if let Some(extra) = args.next() {
            return Err(HarnessError::InvalidArgument(format!(
                "unexpected argument {extra:?}"
            )));
        }

        config.num_samples()?;
        Ok(config)
    }

    /// `2^exponent`, or an error if that does not fit in a `usize`.
    pub fn num_samples(&self) -> Result<usize, HarnessError> {
        1usize.checked_shl(self.exponent).ok_or_else(|| {
            HarnessError::InvalidArgument(format!("exponent {} is too large", self.exponent))
        })
    }
}
