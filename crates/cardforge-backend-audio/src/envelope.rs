//! Linear ADSR amplitude envelope.
//!
//! Notes here have a fixed length known up front, so the envelope is
//! rendered as a whole curve rather than driven sample-by-sample: attack
//! and decay are anchored to the start of the buffer, release to the end,
//! and everything between holds the sustain level.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self::piano()
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters, clamping values into valid ranges.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// The piano-like envelope used for pitch-training notes.
    pub fn piano() -> Self {
        Self {
            attack: 0.02,
            decay: 0.1,
            sustain: 0.7,
            release: 0.3,
        }
    }
}

/// Renders a linear ADSR curve across `total_samples` samples.
///
/// Attack rises 0→1, decay falls 1→sustain, release falls sustain→0 over
/// the final samples of the buffer. Segments that do not fit in the buffer
/// are truncated rather than an error.
///
/// # Arguments
/// * `params` - Envelope parameters
/// * `sample_rate` - Samples per second
/// * `total_samples` - Length of the curve to render
pub fn adsr_curve(params: &AdsrParams, sample_rate: u32, total_samples: usize) -> Vec<f64> {
    let mut envelope = vec![params.sustain; total_samples];
    if total_samples == 0 {
        return envelope;
    }

    let rate = f64::from(sample_rate);
    let attack_samples = ((params.attack * rate) as usize).min(total_samples);
    let decay_samples = ((params.decay * rate) as usize).min(total_samples - attack_samples);
    let release_samples = ((params.release * rate) as usize).min(total_samples);

    for (i, value) in envelope.iter_mut().take(attack_samples).enumerate() {
        *value = i as f64 / attack_samples as f64;
    }
    for i in 0..decay_samples {
        let t = i as f64 / decay_samples as f64;
        envelope[attack_samples + i] = 1.0 + t * (params.sustain - 1.0);
    }
    let release_start = total_samples - release_samples;
    for i in 0..release_samples {
        let t = i as f64 / release_samples as f64;
        envelope[release_start + i] = params.sustain * (1.0 - t);
    }

    envelope
}
