//! Morse code table, timing, and audio sequencing.

use crate::error::AudioError;
use crate::tone::sine_wave;

/// International Morse code for A-Z and 0-9.
pub const MORSE_TABLE: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Looks up the Morse pattern for a character (case-insensitive).
pub fn morse_pattern(c: char) -> Result<&'static str, AudioError> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(ch, _)| *ch == upper)
        .map(|(_, pattern)| *pattern)
        .ok_or(AudioError::UnknownCharacter(c))
}

/// Morse timing parameters. Dash and gap durations derive from the dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorseTiming {
    /// Dot duration in milliseconds.
    pub dot_ms: u32,
    /// Tone frequency in Hz.
    pub frequency_hz: f64,
    /// Tone amplitude (0.0 to 1.0).
    pub amplitude: f64,
}

impl Default for MorseTiming {
    fn default() -> Self {
        Self {
            dot_ms: 100,
            frequency_hz: 800.0,
            amplitude: 0.8,
        }
    }
}

impl MorseTiming {
    /// Dash duration: three dots.
    pub fn dash_ms(&self) -> u32 {
        self.dot_ms * 3
    }

    /// Gap between elements within a character: one dot.
    pub fn element_gap_ms(&self) -> u32 {
        self.dot_ms
    }
}

/// Renders a Morse pattern as audio samples.
///
/// Each element is a tone (dot or dash length) followed by one element gap
/// of silence, including after the final element.
///
/// # Arguments
/// * `pattern` - Sequence of '.' and '-' symbols
/// * `timing` - Dot duration, frequency, and amplitude
/// * `sample_rate` - Samples per second
///
/// # Errors
/// Returns [`AudioError::InvalidMorseSymbol`] for any other symbol.
pub fn render_morse(
    pattern: &str,
    timing: &MorseTiming,
    sample_rate: u32,
) -> Result<Vec<f64>, AudioError> {
    let ms_to_samples = |ms: u32| (u64::from(ms) * u64::from(sample_rate) / 1000) as usize;
    let gap_samples = ms_to_samples(timing.element_gap_ms());

    let mut samples = Vec::new();
    for symbol in pattern.chars() {
        let tone_ms = match symbol {
            '.' => timing.dot_ms,
            '-' => timing.dash_ms(),
            other => return Err(AudioError::InvalidMorseSymbol(other)),
        };
        samples.extend(sine_wave(
            timing.frequency_hz,
            sample_rate,
            ms_to_samples(tone_ms),
            timing.amplitude,
        ));
        samples.extend(std::iter::repeat(0.0).take(gap_samples));
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_complete() {
        assert_eq!(MORSE_TABLE.len(), 36);
        assert_eq!(morse_pattern('A').unwrap(), ".-");
        assert_eq!(morse_pattern('e').unwrap(), ".");
        assert_eq!(morse_pattern('0').unwrap(), "-----");
        assert_eq!(morse_pattern('9').unwrap(), "----.");
    }

    #[test]
    fn test_unknown_character() {
        assert!(matches!(
            morse_pattern('?'),
            Err(AudioError::UnknownCharacter('?'))
        ));
    }

    #[test]
    fn test_timing_derivation() {
        let timing = MorseTiming::default();
        assert_eq!(timing.dot_ms, 100);
        assert_eq!(timing.dash_ms(), 300);
        assert_eq!(timing.element_gap_ms(), 100);
    }

    #[test]
    fn test_render_length() {
        let timing = MorseTiming::default();
        // "A" = ".-": dot (100ms) + gap (100ms) + dash (300ms) + gap (100ms)
        let samples = render_morse(".-", &timing, 44100).unwrap();
        assert_eq!(samples.len(), 44100 * 600 / 1000);
    }

    #[test]
    fn test_render_ends_in_silence() {
        let samples = render_morse(".", &MorseTiming::default(), 44100).unwrap();
        let gap = 4410;
        assert!(samples[samples.len() - gap..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_render_rejects_bad_symbol() {
        let err = render_morse(".x-", &MorseTiming::default(), 44100).unwrap_err();
        assert!(matches!(err, AudioError::InvalidMorseSymbol('x')));
    }

    #[test]
    fn test_render_is_deterministic() {
        let timing = MorseTiming::default();
        let a = render_morse("-.-.", &timing, 44100).unwrap();
        let b = render_morse("-.-.", &timing, 44100).unwrap();
        assert_eq!(a, b);
    }
}
