//! Serializable envelopes for `--json` command output.

use serde::Serialize;

use cardforge_deck::{BuildSummary, ValidationWarning};

/// A metadata warning in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonWarning {
    /// Warning code (e.g., "W001").
    pub code: String,
    /// Human-readable warning message.
    pub message: String,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
        }
    }
}

/// JSON envelope for a single deck build.
#[derive(Debug, Serialize)]
pub struct BuildOutput {
    /// Catalog id the deck was built from.
    pub deck: String,
    /// Stable deck identifier embedded in the package.
    pub deck_id: i64,
    /// Deck title.
    pub title: String,
    /// Number of notes written.
    pub notes: usize,
    /// Number of media files embedded.
    pub media: usize,
    /// Path of the written `.apkg` file.
    pub output_path: String,
    /// Non-fatal metadata warnings.
    pub warnings: Vec<JsonWarning>,
}

impl BuildOutput {
    /// Builds the envelope from a catalog id and its build summary.
    pub fn from_summary(deck: &str, summary: &BuildSummary) -> Self {
        Self {
            deck: deck.to_string(),
            deck_id: summary.deck_id,
            title: summary.title.clone(),
            notes: summary.note_count,
            media: summary.media_count,
            output_path: summary.output_path.to_string_lossy().into_owned(),
            warnings: summary.warnings.iter().map(JsonWarning::from).collect(),
        }
    }
}

/// A failed deck build in `build-all --json` output.
#[derive(Debug, Serialize)]
pub struct BuildFailure {
    /// Catalog id of the deck that failed.
    pub deck: String,
    /// Rendered error chain.
    pub error: String,
}

/// JSON envelope for the `build-all` command.
#[derive(Debug, Serialize)]
pub struct BuildAllOutput {
    /// Successfully built decks.
    pub built: Vec<BuildOutput>,
    /// Decks that failed to build.
    pub failed: Vec<BuildFailure>,
    /// Deck ids skipped (network or missing inputs).
    pub skipped: Vec<String>,
}

/// One catalog entry in `list --json` output.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    /// Catalog id.
    pub deck: String,
    /// Deck title.
    pub title: String,
    /// Deck version string.
    pub version: String,
    /// Short description.
    pub description: String,
    /// Whether a default build needs network access.
    pub network: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardforge_deck::{ValidationWarning, WarningCode};
    use std::path::PathBuf;

    #[test]
    fn test_build_output_serializes() {
        let summary = BuildSummary {
            deck_id: 12345,
            title: "Test Deck".to_string(),
            note_count: 3,
            media_count: 1,
            output_path: PathBuf::from("out/test.apkg"),
            warnings: vec![ValidationWarning::new(
                WarningCode::DefaultAuthor,
                "author not set",
            )],
        };
        let output = BuildOutput::from_summary("test-deck", &summary);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["deck"], "test-deck");
        assert_eq!(json["notes"], 3);
        assert_eq!(json["warnings"][0]["code"], "W001");
    }
}
