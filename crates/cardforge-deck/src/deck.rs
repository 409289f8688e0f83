//! Deck assembly and packaging.
//!
//! A [`DeckSource`] supplies metadata, a note model, and the notes
//! themselves (staging any media it generates along the way);
//! [`package_deck`] validates the source, assembles the packaging
//! library's object graph, and writes the `.apkg` file.

use std::path::{Path, PathBuf};

use genanki_rs::{Deck, Field, Model, Package, Template};

use crate::error::{DeckError, ValidationWarning};
use crate::media::MediaStore;
use crate::metadata::DeckMetadata;
use crate::model::{Note, NoteModel};

/// A buildable deck: metadata, schema, and note generation.
pub trait DeckSource {
    /// The deck's metadata.
    fn metadata(&self) -> &DeckMetadata;

    /// The note model all of this deck's notes follow.
    fn model(&self) -> NoteModel;

    /// Generates the deck's notes, staging any media into `media`.
    fn notes(&self, media: &mut MediaStore) -> Result<Vec<Note>, DeckError>;
}

/// Result of a successful deck build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// The deck's stable identifier.
    pub deck_id: i64,
    /// The deck title.
    pub title: String,
    /// Number of notes written.
    pub note_count: usize,
    /// Number of media files written.
    pub media_count: usize,
    /// Path of the written `.apkg` file.
    pub output_path: PathBuf,
    /// Non-fatal metadata warnings.
    pub warnings: Vec<ValidationWarning>,
}

/// Builds a deck from `source` and writes it to `output_path`.
///
/// Media is staged under `media_dir`; the directory must outlive the call
/// but may be deleted afterwards (the package embeds copies).
///
/// # Errors
/// * [`DeckError::InvalidMetadata`] if metadata validation reports errors
/// * [`DeckError::EmptyDeck`] if the source produces no notes
/// * [`DeckError::FieldCountMismatch`] if a note disagrees with the model
/// * [`DeckError::Packaging`] if the packaging library rejects the graph
pub fn package_deck(
    source: &dyn DeckSource,
    media_dir: &Path,
    output_path: &Path,
) -> Result<BuildSummary, DeckError> {
    let metadata = source.metadata();
    let validation = metadata.validate();
    if !validation.is_ok() {
        return Err(DeckError::InvalidMetadata(validation.errors.len()));
    }

    let model = source.model();
    let mut media = MediaStore::new(media_dir)?;
    let notes = source.notes(&mut media)?;
    if notes.is_empty() {
        return Err(DeckError::EmptyDeck(metadata.title.clone()));
    }
    for note in &notes {
        if note.fields.len() != model.fields.len() {
            return Err(DeckError::FieldCountMismatch {
                model: model.name.clone(),
                expected: model.fields.len(),
                got: note.fields.len(),
            });
        }
    }

    let deck_id = crate::id::stable_id("deck", metadata);
    let pkg_model = to_package_model(&model);
    let mut deck = Deck::new(deck_id, &metadata.title, &metadata.format_description());
    for note in &notes {
        let fields: Vec<&str> = note.fields.iter().map(String::as_str).collect();
        let tags: Vec<&str> = note.tags.iter().map(String::as_str).collect();
        let pkg_note = genanki_rs::Note::new_with_options(
            pkg_model.clone(),
            fields,
            None,
            Some(tags),
            Some(&note.guid),
        )
        .map_err(|e| DeckError::Packaging(e.to_string()))?;
        deck.add_note(pkg_note);
    }

    let media_paths: Vec<String> = media
        .files()
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let media_refs: Vec<&str> = media_paths.iter().map(String::as_str).collect();
    let mut package =
        Package::new(vec![deck], media_refs).map_err(|e| DeckError::Packaging(e.to_string()))?;
    package
        .write_to_file(&output_path.to_string_lossy())
        .map_err(|e| DeckError::Packaging(e.to_string()))?;

    Ok(BuildSummary {
        deck_id,
        title: metadata.title.clone(),
        note_count: notes.len(),
        media_count: media.len(),
        output_path: output_path.to_path_buf(),
        warnings: validation.warnings,
    })
}

fn to_package_model(model: &NoteModel) -> Model {
    let fields: Vec<Field> = model.fields.iter().map(|f| Field::new(f)).collect();
    let templates: Vec<Template> = model
        .templates
        .iter()
        .map(|t| Template::new(&t.name).qfmt(&t.qfmt).afmt(&t.afmt))
        .collect();
    Model::new(model.id, &model.name, fields, templates).css(&model.css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{note_guid, stable_id};
    use crate::model::CardTemplate;
    use crate::style::DEFAULT_CSS;

    struct StaticDeck {
        metadata: DeckMetadata,
        pairs: Vec<(&'static str, &'static str)>,
    }

    impl StaticDeck {
        fn new(pairs: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                metadata: DeckMetadata::builder("Test Deck")
                    .tag("test")
                    .description("A test deck")
                    .author("tester")
                    .build(),
                pairs,
            }
        }
    }

    impl DeckSource for StaticDeck {
        fn metadata(&self) -> &DeckMetadata {
            &self.metadata
        }

        fn model(&self) -> NoteModel {
            NoteModel::new(
                crate::id::qualified_model_id(&self.metadata, "Simple QA"),
                "Simple QA",
                vec!["Question", "Answer"],
                vec![CardTemplate::new(
                    "Card",
                    "<div class=\"question\">{{Question}}</div>",
                    "{{FrontSide}}<hr id=\"answer\"><div class=\"answer\">{{Answer}}</div>",
                )],
                DEFAULT_CSS,
            )
        }

        fn notes(&self, _media: &mut MediaStore) -> Result<Vec<Note>, DeckError> {
            let model_id = self.model().id;
            Ok(self
                .pairs
                .iter()
                .map(|(q, a)| {
                    Note::new(
                        vec![q.to_string(), a.to_string()],
                        note_guid(model_id, q),
                        vec!["test".to_string()],
                    )
                })
                .collect())
        }
    }

    #[test]
    fn test_package_writes_apkg() {
        let tmp = tempfile::tempdir().unwrap();
        let source = StaticDeck::new(vec![("2+2?", "4"), ("3+3?", "6")]);
        let out = tmp.path().join("test.apkg");
        let summary = package_deck(&source, &tmp.path().join("media"), &out).unwrap();
        assert!(out.exists());
        assert_eq!(summary.note_count, 2);
        assert_eq!(summary.media_count, 0);
        assert_eq!(summary.deck_id, stable_id("deck", source.metadata()));
    }

    #[test]
    fn test_empty_deck_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let source = StaticDeck::new(vec![]);
        let err = package_deck(
            &source,
            &tmp.path().join("media"),
            &tmp.path().join("test.apkg"),
        )
        .unwrap_err();
        assert!(matches!(err, DeckError::EmptyDeck(title) if title == "Test Deck"));
    }

    #[test]
    fn test_invalid_metadata_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut source = StaticDeck::new(vec![("q", "a")]);
        source.metadata.tags.clear();
        source.metadata.description.clear();
        let err = package_deck(
            &source,
            &tmp.path().join("media"),
            &tmp.path().join("test.apkg"),
        )
        .unwrap_err();
        assert!(matches!(err, DeckError::InvalidMetadata(2)));
    }

    struct MismatchedDeck(StaticDeck);

    impl DeckSource for MismatchedDeck {
        fn metadata(&self) -> &DeckMetadata {
            self.0.metadata()
        }

        fn model(&self) -> NoteModel {
            self.0.model()
        }

        fn notes(&self, _media: &mut MediaStore) -> Result<Vec<Note>, DeckError> {
            Ok(vec![Note::new(
                vec!["only one field".to_string()],
                note_guid(self.0.model().id, "x"),
                vec![],
            )])
        }
    }

    #[test]
    fn test_field_count_mismatch_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let source = MismatchedDeck(StaticDeck::new(vec![]));
        let err = package_deck(
            &source,
            &tmp.path().join("media"),
            &tmp.path().join("test.apkg"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DeckError::FieldCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }
}
