//! Drivers around the `flicker-fft` engine.
//!
//! [`drivers::generate_test_vectors`] writes C headers of literal input and output arrays for
//! the on-device test runner; [`drivers::plot_spectra`] emits magnitude charts for visual
//! inspection. Both compare the engine against the `rustfft` reference first.

pub mod checks;
pub mod config;
pub mod drivers;
pub mod error;
pub mod header;
pub mod plot;
pub mod waveforms;

pub use crate::config::Config;
pub use crate::error::HarnessError;
