pub extern crate rustfft;

// export rustfft to the engine's tests and the harness
use rand::{distributions::Uniform, prelude::*, rngs::StdRng};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::FftPlanner;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Elementwise `|a - b| <= atol + rtol * |b|` over two complex sequences of equal length,
/// with the magnitude of the complex difference as the distance.
pub fn allclose<T: Float>(a: &[Complex<T>], b: &[Complex<T>], rtol: T, atol: T) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| (*x - *y).norm() <= atol + rtol * y.norm())
}

/// Generate a random, real, signal in `[-1, 1)` in the provided buffer.
///
/// The same `seed` always produces the same signal.
pub fn gen_random_signal<T>(reals: &mut [T], seed: u64)
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for real in reals.iter_mut() {
        *real = uniform_dist.sample(&mut rng);
    }
}

/// Forward DFT of a real signal computed by `rustfft`, the trusted reference.
pub fn reference_fft(input: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = input.iter().map(|x| Complex::new(*x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 16;
        let mut reals: Vec<f64> = vec![0.0; big_n];

        gen_random_signal(&mut reals, 42);

        assert!(reals.iter().all(|x| (-1.0..1.0).contains(x)));
        let mean = reals.iter().sum::<f64>() / big_n as f64;
        assert_float_closeness(mean, 0.0, 1e-2);
    }

    #[test]
    fn random_signal_is_seeded() {
        let mut a = vec![0.0f32; 64];
        let mut b = vec![0.0f32; 64];
        gen_random_signal(&mut a, 7);
        gen_random_signal(&mut b, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn reference_of_dc() {
        let spectrum = reference_fft(&[1.0; 4]);
        assert_float_closeness(spectrum[0].re, 4.0, 1e-12);
        for z in &spectrum[1..] {
            assert_float_closeness(z.norm(), 0.0, 1e-12);
        }
    }

    #[test]
    fn allclose_semantics() {
        let a = [Complex::new(1.0, 0.0), Complex::new(100.0, 0.0)];
        let b = [Complex::new(1.0005, 0.0), Complex::new(100.05, 0.0)];
        assert!(allclose(&a, &b, 1e-3, 0.0));
        assert!(!allclose(&a, &b, 1e-5, 0.0));
        assert!(!allclose(&a[..1], &b, 1.0, 1.0));
    }
}
