//! Sine and additive-harmonic tone generation.

use std::f64::consts::TAU;

/// Generates a sine wave.
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `sample_rate` - Samples per second
/// * `num_samples` - Number of samples to render
/// * `amplitude` - Peak amplitude (0.0 to 1.0)
pub fn sine_wave(frequency: f64, sample_rate: u32, num_samples: usize, amplitude: f64) -> Vec<f64> {
    let rate = f64::from(sample_rate);
    (0..num_samples)
        .map(|i| amplitude * (TAU * frequency * (i as f64 / rate)).sin())
        .collect()
}

/// Generates an additive stack of integer harmonics, normalized to unit peak.
///
/// Harmonic `k` (1-based) is rendered at `frequency * k`, scaled by
/// `weights[k - 1]`, and summed; the result is divided by its peak absolute
/// value so the caller controls the final amplitude.
pub fn harmonic_stack(
    frequency: f64,
    sample_rate: u32,
    num_samples: usize,
    weights: &[f64],
) -> Vec<f64> {
    let rate = f64::from(sample_rate);
    let mut tone = vec![0.0; num_samples];
    for (k, &weight) in weights.iter().enumerate() {
        let harmonic_freq = frequency * (k + 1) as f64;
        for (i, sample) in tone.iter_mut().enumerate() {
            *sample += weight * (TAU * harmonic_freq * (i as f64 / rate)).sin();
        }
    }

    let peak = tone.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()));
    if peak > 0.0 {
        for sample in &mut tone {
            *sample /= peak;
        }
    }
    tone
}
