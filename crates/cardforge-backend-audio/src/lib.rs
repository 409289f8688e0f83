//! CardForge audio backend.
//!
//! Deterministic audio synthesis for flashcard media: Morse code tone
//! sequences, equal-temperament note frequencies, piano-like notes shaped
//! by a linear ADSR envelope, and a mono 16-bit PCM WAV writer. All
//! synthesis is pure arithmetic over the inputs, so equal parameters
//! always produce byte-identical WAV files.

pub mod envelope;
pub mod error;
pub mod morse;
pub mod pitch;
pub mod tone;
pub mod wav;

pub use envelope::{adsr_curve, AdsrParams};
pub use error::AudioError;
pub use morse::{morse_pattern, render_morse, MorseTiming, MORSE_TABLE};
pub use pitch::{note_frequency, piano_tone, NOTE_NAMES, PIANO_AMPLITUDE, PIANO_HARMONICS};
pub use wav::{samples_to_pcm16, write_wav, WavFormat, WavResult};

/// Default sample rate for generated deck audio.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
