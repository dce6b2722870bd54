//! Test helpers and fixtures for blockstep integration tests
//!
//! Deterministic signal generators and delay-line checks. Every pipeline
//! in self-test mode is a pure delay, so staircase and impulse signals let
//! a test pin down exactly which input sample landed on which output frame.

pub mod tolerances;

use blockstep::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Period size used when a test does not care.
pub const TEST_PERIOD: usize = 128;

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}

/// Generate an integer staircase signal [1, 2, ..., n] as f32.
///
/// Starts at 1 so that every real sample is distinguishable from the
/// zero pre-roll.
pub fn generate_staircase(num_samples: usize) -> Vec<f32> {
    (1..=num_samples).map(|i| i as f32).collect()
}

/// Generate an impulse signal (single sample at 1.0, rest zeros).
pub fn generate_impulse(num_samples: usize, position: usize) -> Vec<f32> {
    let mut samples = vec![0.0; num_samples];
    if position < num_samples {
        samples[position] = 1.0;
    }
    samples
}

/// Every named test signal, for sweeping a property over all of them.
pub fn test_signals(num_samples: usize) -> Vec<(&'static str, Vec<f32>)> {
    vec![
        ("silence", generate_silence(num_samples)),
        ("impulse", generate_impulse(num_samples, num_samples / 3)),
        ("staircase", generate_staircase(num_samples)),
        ("sine", generate_sine(997.0, TEST_SAMPLE_RATE, num_samples)),
        ("noise", generate_noise(num_samples, 42)),
    ]
}

/// `input` delayed by `latency` samples, zero-filled at the front.
pub fn delayed(input: &[f32], latency: usize) -> Vec<f32> {
    let mut out = vec![0.0; input.len()];
    if latency < input.len() {
        out[latency..].copy_from_slice(&input[..input.len() - latency]);
    }
    out
}

/// Self-test output for `input`: the input delayed by `latency`, with the
/// frames after the last completed stride left silent.
pub fn expected_echo(input: &[f32], latency: usize, stride: usize) -> Vec<f32> {
    let mut out = delayed(input, latency);
    let triggered = input.len() / stride * stride;
    out[triggered..].fill(0.0);
    out
}

/// Index of the first differing sample, if any.
pub fn first_mismatch(a: &[f32], b: &[f32]) -> Option<usize> {
    if a.len() != b.len() {
        return Some(a.len().min(b.len()));
    }
    a.iter().zip(b).position(|(x, y)| x.to_bits() != y.to_bits())
}

/// Assert two signals are identical sample for sample.
pub fn assert_bit_exact(actual: &[f32], expected: &[f32], context: &str) {
    if let Some(i) = first_mismatch(actual, expected) {
        panic!(
            "{context}: first mismatch at sample {i}: got {:?}, expected {:?}",
            actual.get(i),
            expected.get(i)
        );
    }
}

/// Identity backend shaped for `window`.
pub fn identity_backend(window: &WindowSpec) -> ClosureBackend {
    ClosureBackend::identity(model_shape(window))
}

pub fn model_shape(window: &WindowSpec) -> ModelShape {
    ModelShape::new(
        window.window_samples,
        window.aux_param_count,
        window.output_samples,
    )
}

/// Untimed self-test run of `preset` over `input`.
pub fn self_test_run(preset: ModelPreset, input: Vec<f32>, period: usize) -> HarnessReport {
    Harness::builder()
        .config(SessionConfig::preset(preset).without_timing())
        .self_test()
        .input(input)
        .sample_rate(TEST_SAMPLE_RATE)
        .period_frames(period)
        .build()
        .expect("Failed to build harness")
        .run()
        .expect("Run failed")
}
