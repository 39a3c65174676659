use std::f64::consts::PI;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seed of the pseudorandom noise waveform, fixed so the vectors are reproducible.
const NOISE_SEED: u64 = 700;

/// Amplitude of the "big" waveforms, which exercise the upper range of 16-bit ADC samples.
const BIG_AMPLITUDE: f64 = 4096.0;

/// Test signals the generator runs through the transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Four periods of a cosine.
    Cosine,
    /// Uniform noise in `[-0.5, 0.5)`.
    Noise,
    /// Square wave of amplitude 1, flipping sign every 256 samples.
    Square,
    /// [`Waveform::Square`] scaled to `2^12` and stored as `i16`.
    BigSquare,
    /// Sawtooth of amplitude 1 with 256 periods over the whole signal.
    Sawtooth,
    /// [`Waveform::Sawtooth`] scaled to `2^12` and truncated to `i16`.
    BigSawtooth,
}

impl Waveform {
    pub const ALL: [Waveform; 6] = [
        Waveform::Cosine,
        Waveform::Noise,
        Waveform::Square,
        Waveform::BigSquare,
        Waveform::Sawtooth,
        Waveform::BigSawtooth,
    ];

    /// Identifier used for file names and C symbols.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Cosine => "cosine",
            Waveform::Noise => "noise",
            Waveform::Square => "square",
            Waveform::BigSquare => "bigsquare",
            Waveform::Sawtooth => "sawtooth",
            Waveform::BigSawtooth => "bigsawtooth",
        }
    }

    /// `len` samples of this waveform.
    pub fn samples(self, len: usize) -> Vec<f64> {
        match self {
            Waveform::Cosine => linspace(0.0, PI * 8.0, len).map(f64::cos).collect(),
            Waveform::Noise => {
                let mut rng = StdRng::seed_from_u64(NOISE_SEED);
                (0..len).map(|_| rng.gen::<f64>() - 0.5).collect()
            }
            Waveform::Square => (0..len).map(square).collect(),
            Waveform::BigSquare => (0..len)
                .map(|x| to_i16(square(x) * BIG_AMPLITUDE))
                .collect(),
            Waveform::Sawtooth => linspace(0.0, 256.0, len).map(sawtooth).collect(),
            Waveform::BigSawtooth => linspace(0.0, 256.0, len)
                .map(|x| to_i16(sawtooth(x) * BIG_AMPLITUDE))
                .collect(),
        }
    }
}

/// `len` evenly spaced points from `start` to `stop`, both ends included.
fn linspace(start: f64, stop: f64, len: usize) -> impl Iterator<Item = f64> {
    let step = if len > 1 {
        (stop - start) / (len - 1) as f64
    } else {
        0.0
    };
    (0..len).map(move |i| start + step * i as f64)
}

fn square(x: usize) -> f64 {
    (((x >> 7) & 2) as f64) - 1.0
}

fn sawtooth(x: f64) -> f64 {
    (x % 1.0) * 2.0 - 1.0
}

/// Truncates toward zero into the `i16` range, the way 16-bit samples are stored.
fn to_i16(x: f64) -> f64 {
    f64::from(x as i16)
}
