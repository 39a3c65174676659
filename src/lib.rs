//! In-place radix-2 decimation-in-time FFT of real-valued signals.
//!
//! The transform is generic over the sample type: anything implementing [`num_traits::Float`]
//! works, including [`half::f16`], `f32` and `f64`. Twiddle factors are always evaluated in `f64`
//! and narrowed afterwards.
//!
//! ```
//! use flicker_fft::{forward_real_fft, FftError};
//!
//! let mut impulse = vec![0.0f32; 8];
//! impulse[0] = 1.0;
//! let spectrum = forward_real_fft(&impulse, 3)?;
//! assert!(spectrum.iter().all(|z| z.re == 1.0 && z.im == 0.0));
//!
//! assert!(forward_real_fft(&[0.0f32; 10], 3).is_err());
//! # Ok::<(), FftError>(())
//! ```
#![warn(missing_docs)]

pub use half;
pub use num_complex;

pub use crate::bit_reverse::{bit_reverse_shuffle, reverse_bits};
pub use crate::error::FftError;
pub use crate::fft::{forward_real_fft, forward_real_fft_split, non_redundant_half};
pub use crate::twiddles::twiddle;

mod bit_reverse;
mod error;
mod fft;
mod kernels;
mod twiddles;
mod utils;
