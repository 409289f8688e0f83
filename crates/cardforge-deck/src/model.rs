//! Note model and note types.
//!
//! A [`NoteModel`] is the schema shared by all notes of one card type:
//! ordered field names, one or more front/back templates, and CSS. These
//! are plain data; conversion to the packaging library's types happens
//! during packaging.

/// One front/back template pair within a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    /// Template name shown in the card browser.
    pub name: String,
    /// Question-side HTML format string.
    pub qfmt: String,
    /// Answer-side HTML format string.
    pub afmt: String,
}

impl CardTemplate {
    /// Creates a new template.
    pub fn new(
        name: impl Into<String>,
        qfmt: impl Into<String>,
        afmt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            qfmt: qfmt.into(),
            afmt: afmt.into(),
        }
    }
}

/// Schema for one card type: field names, templates, and styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteModel {
    /// Stable model identifier (see [`crate::id`]).
    pub id: i64,
    /// Model name.
    pub name: String,
    /// Ordered field names; every note must supply exactly this many values.
    pub fields: Vec<String>,
    /// Card templates rendered from the fields.
    pub templates: Vec<CardTemplate>,
    /// CSS applied to every card of this model.
    pub css: String,
}

impl NoteModel {
    /// Creates a new model.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        fields: Vec<&str>,
        templates: Vec<CardTemplate>,
        css: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            fields: fields.into_iter().map(str::to_string).collect(),
            templates,
            css: css.into(),
        }
    }
}

/// One question/answer content unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Field values, in the model's field order.
    pub fields: Vec<String>,
    /// Stable GUID so re-imports update rather than duplicate.
    pub guid: String,
    /// Tags applied to this note (deck tags plus per-note tags).
    pub tags: Vec<String>,
}

impl Note {
    /// Creates a new note.
    pub fn new(fields: Vec<String>, guid: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            fields,
            guid: guid.into(),
            tags,
        }
    }
}
