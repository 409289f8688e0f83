//! Note frequencies and piano-like tone synthesis.

use crate::envelope::{adsr_curve, AdsrParams};
use crate::error::AudioError;
use crate::tone::harmonic_stack;

/// The twelve chromatic note names, C through B.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Harmonic weights for the piano-like timbre (fundamental plus three
/// overtones at halving amplitudes).
pub const PIANO_HARMONICS: [f64; 4] = [1.0, 0.5, 0.25, 0.125];

/// Output amplitude of piano tones.
pub const PIANO_AMPLITUDE: f64 = 0.3;

const A4_FREQ: f64 = 440.0;
const A4_OCTAVE: i32 = 4;
const A4_INDEX: i32 = 9;

/// Computes the equal-temperament frequency of a note.
///
/// # Arguments
/// * `name` - Note name ("C" through "B", sharps only)
/// * `octave` - Scientific pitch octave (A4 = 440 Hz)
///
/// # Errors
/// Returns [`AudioError::UnknownNote`] for names not in [`NOTE_NAMES`].
pub fn note_frequency(name: &str, octave: i32) -> Result<f64, AudioError> {
    let index = NOTE_NAMES
        .iter()
        .position(|&n| n == name)
        .ok_or_else(|| AudioError::UnknownNote(name.to_string()))? as i32;
    let semitones = (octave - A4_OCTAVE) * 12 + (index - A4_INDEX);
    Ok(A4_FREQ * 2.0_f64.powf(f64::from(semitones) / 12.0))
}

/// Synthesizes a piano-like note.
///
/// Four harmonics at [`PIANO_HARMONICS`] weights are summed, normalized to
/// unit peak, shaped by the piano ADSR envelope, and scaled to
/// [`PIANO_AMPLITUDE`].
///
/// # Arguments
/// * `frequency` - Fundamental frequency in Hz
/// * `sample_rate` - Samples per second
/// * `duration_secs` - Note length in seconds
pub fn piano_tone(frequency: f64, sample_rate: u32, duration_secs: f64) -> Vec<f64> {
    let num_samples = (f64::from(sample_rate) * duration_secs) as usize;
    let tone = harmonic_stack(frequency, sample_rate, num_samples, &PIANO_HARMONICS);
    let envelope = adsr_curve(&AdsrParams::piano(), sample_rate, num_samples);
    tone.iter()
        .zip(&envelope)
        .map(|(s, e)| s * e * PIANO_AMPLITUDE)
        .collect()
}
