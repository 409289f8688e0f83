//! Error types for deck metadata validation and packaging.

use thiserror::Error;

/// Error codes for deck metadata validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// M001: Title exceeds the 60 character limit
    TitleTooLong,
    /// M002: No tags declared
    NoTags,
    /// M003: Description is empty
    EmptyDescription,
    /// M004: Version is empty
    EmptyVersion,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "M001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::TitleTooLong => "M001",
            ErrorCode::NoTags => "M002",
            ErrorCode::EmptyDescription => "M003",
            ErrorCode::EmptyVersion => "M004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for deck metadata validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Author left at the default value
    DefaultAuthor,
    /// W002: Tag contains whitespace (splits into multiple tags on import)
    TagContainsWhitespace,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::DefaultAuthor => "W001",
            WarningCode::TagContainsWhitespace => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result of metadata validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates an empty (passing) validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Top-level error type for deck building and packaging.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Metadata validation failed with one or more errors.
    #[error("metadata validation failed with {0} error(s)")]
    InvalidMetadata(usize),

    /// A deck was built with no notes.
    #[error("deck '{0}' produced no notes")]
    EmptyDeck(String),

    /// A note's field count does not match its model.
    #[error("note has {got} field(s), model '{model}' expects {expected}")]
    FieldCountMismatch {
        /// Model name.
        model: String,
        /// Expected field count from the model.
        expected: usize,
        /// Actual field count on the note.
        got: usize,
    },

    /// Two media files were staged under the same filename.
    #[error("duplicate media filename: {0}")]
    DuplicateMedia(String),

    /// A deck source failed while generating its cards or media.
    #[error("card generation failed: {0}")]
    Generation(String),

    /// A deck id is not in the catalog.
    #[error("unknown deck id: {0}")]
    UnknownDeck(String),

    /// The packaging library rejected the deck graph.
    #[error("packaging error: {0}")]
    Packaging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::TitleTooLong.code(), "M001");
        assert_eq!(ErrorCode::NoTags.code(), "M002");
        assert_eq!(ErrorCode::EmptyDescription.code(), "M003");
        assert_eq!(ErrorCode::EmptyVersion.code(), "M004");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::DefaultAuthor.code(), "W001");
        assert_eq!(WarningCode::TagContainsWhitespace.code(), "W002");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::NoTags, "at least one tag is required");
        assert_eq!(err.to_string(), "M002: at least one tag is required");
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(
            WarningCode::DefaultAuthor,
            "author not set",
        ));
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::EmptyDescription, "empty"));
        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
    }
}
