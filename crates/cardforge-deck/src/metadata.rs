//! Deck metadata and validation.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Maximum deck title length accepted by the packaging target.
pub const MAX_TITLE_LEN: usize = 60;

/// Default author for decks built by this workspace.
pub const DEFAULT_AUTHOR: &str = "cardforge";

/// Default license identifier.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Default support URL embedded in deck descriptions.
pub const DEFAULT_SUPPORT_URL: &str = "https://github.com/cardforge/cardforge";

/// Human-facing metadata describing one deck.
///
/// The title, author, and version together determine the deck's stable
/// identifiers, so changing any of them produces a new deck on import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckMetadata {
    /// Deck title shown in the flashcard application.
    pub title: String,
    /// Semantic tags applied to every note.
    pub tags: Vec<String>,
    /// One-paragraph description of what the deck teaches.
    pub description: String,
    /// Deck version string (e.g., "1.0").
    pub version: String,
    /// Deck author.
    pub author: String,
    /// License identifier.
    pub license: String,
    /// Where users report problems.
    pub support_url: String,
}

impl DeckMetadata {
    /// Creates a new metadata builder.
    pub fn builder(title: impl Into<String>) -> DeckMetadataBuilder {
        DeckMetadataBuilder::new(title)
    }

    /// Validates the metadata, collecting all errors and warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.title.chars().count() > MAX_TITLE_LEN {
            result.add_error(ValidationError::new(
                ErrorCode::TitleTooLong,
                format!(
                    "title must be {} characters or less (got {})",
                    MAX_TITLE_LEN,
                    self.title.chars().count()
                ),
            ));
        }
        if self.tags.is_empty() {
            result.add_error(ValidationError::new(
                ErrorCode::NoTags,
                "at least one tag is required",
            ));
        }
        if self.description.trim().is_empty() {
            result.add_error(ValidationError::new(
                ErrorCode::EmptyDescription,
                "description is required",
            ));
        }
        if self.version.trim().is_empty() {
            result.add_error(ValidationError::new(
                ErrorCode::EmptyVersion,
                "version is required",
            ));
        }

        if self.author == DEFAULT_AUTHOR {
            result.add_warning(ValidationWarning::new(
                WarningCode::DefaultAuthor,
                "author left at default; stable IDs will collide with other default-author decks of the same title",
            ));
        }
        for tag in &self.tags {
            if tag.contains(char::is_whitespace) {
                result.add_warning(ValidationWarning::new(
                    WarningCode::TagContainsWhitespace,
                    format!("tag '{}' contains whitespace", tag),
                ));
            }
        }

        result
    }

    /// Formats the deck description block embedded in the package.
    ///
    /// Mirrors the layout users see in the deck browser: description first,
    /// then version/author/license/tags, then the support URL.
    pub fn format_description(&self) -> String {
        format!(
            "{title}\n\n{description}\n\n\
             Deck Information:\n\
             Version: {version}\n\
             Author: {author}\n\
             License: {license}\n\
             Tags: {tags}\n\n\
             Support:\n\
             For support, bug reports, or feature requests, please visit:\n\
             {support_url}",
            title = self.title,
            description = self.description,
            version = self.version,
            author = self.author,
            license = self.license,
            tags = self.tags.join(", "),
            support_url = self.support_url,
        )
    }
}

/// Builder for [`DeckMetadata`].
#[derive(Debug, Clone)]
pub struct DeckMetadataBuilder {
    title: String,
    tags: Vec<String>,
    description: String,
    version: String,
    author: String,
    license: String,
    support_url: String,
}

impl DeckMetadataBuilder {
    /// Creates a new builder with defaults for author, license, and support URL.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
            description: String::new(),
            version: "1.0".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            support_url: DEFAULT_SUPPORT_URL.to_string(),
        }
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the license.
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Sets the support URL.
    pub fn support_url(mut self, url: impl Into<String>) -> Self {
        self.support_url = url.into();
        self
    }

    /// Builds the metadata.
    pub fn build(self) -> DeckMetadata {
        DeckMetadata {
            title: self.title,
            tags: self.tags,
            description: self.description,
            version: self.version,
            author: self.author,
            license: self.license,
            support_url: self.support_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn valid_metadata() -> DeckMetadata {
        DeckMetadata::builder("Morse Code")
            .tag("morse-code")
            .description("Practice converting characters to Morse code")
            .version("1.0")
            .author("someone")
            .build()
    }

    #[test]
    fn test_valid_metadata_passes() {
        let result = valid_metadata().validate();
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_title_too_long() {
        let mut meta = valid_metadata();
        meta.title = "x".repeat(61);
        let result = meta.validate();
        assert!(!result.is_ok());
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::TitleTooLong));
    }

    #[test]
    fn test_title_at_limit_passes() {
        let mut meta = valid_metadata();
        meta.title = "x".repeat(60);
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_missing_tags() {
        let mut meta = valid_metadata();
        meta.tags.clear();
        let result = meta.validate();
        assert!(result.errors.iter().any(|e| e.code == ErrorCode::NoTags));
    }

    #[test]
    fn test_blank_description() {
        let mut meta = valid_metadata();
        meta.description = "   ".to_string();
        let result = meta.validate();
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::EmptyDescription));
    }

    #[test]
    fn test_default_author_warns() {
        let meta = DeckMetadata::builder("Test")
            .tag("test")
            .description("desc")
            .build();
        let result = meta.validate();
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_format_description_contains_metadata() {
        let meta = valid_metadata();
        let desc = meta.format_description();
        assert!(desc.contains("Morse Code"));
        assert!(desc.contains("Version: 1.0"));
        assert!(desc.contains("Author: someone"));
        assert!(desc.contains("Tags: morse-code"));
        assert!(desc.contains(DEFAULT_SUPPORT_URL));
    }
}
