//! Error types for audio synthesis.

use thiserror::Error;

/// Errors produced by the audio backend.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A Morse pattern contained a symbol other than '.' or '-'.
    #[error("invalid Morse symbol '{0}' (expected '.' or '-')")]
    InvalidMorseSymbol(char),

    /// A character has no Morse encoding.
    #[error("no Morse encoding for character '{0}'")]
    UnknownCharacter(char),

    /// A note name is not one of the twelve chromatic names.
    #[error("unknown note name '{0}'")]
    UnknownNote(String),
}
