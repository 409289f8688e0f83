//! CardForge core deck types.
//!
//! This crate defines the shared vocabulary of the workspace: deck
//! metadata and its validation rules, stable identifier derivation, note
//! models and notes, media staging, and `.apkg` packaging. Deck families
//! implement [`DeckSource`] and hand it to [`package_deck`].
//!
//! # Example
//!
//! ```no_run
//! use cardforge_deck::{DeckMetadata, DeckSource, MediaStore, Note, NoteModel, package_deck};
//! # use cardforge_deck::{CardTemplate, DeckError, note_guid, qualified_model_id, DEFAULT_CSS};
//! # struct MyDeck { metadata: DeckMetadata }
//! # impl DeckSource for MyDeck {
//! #     fn metadata(&self) -> &DeckMetadata { &self.metadata }
//! #     fn model(&self) -> NoteModel {
//! #         NoteModel::new(1, "QA", vec!["Q", "A"], vec![], DEFAULT_CSS)
//! #     }
//! #     fn notes(&self, _media: &mut MediaStore) -> Result<Vec<Note>, DeckError> { Ok(vec![]) }
//! # }
//! let deck = MyDeck {
//!     metadata: DeckMetadata::builder("My Deck")
//!         .tag("example")
//!         .description("An example deck")
//!         .build(),
//! };
//! let summary = package_deck(&deck, "media".as_ref(), "my_deck.apkg".as_ref())?;
//! println!("wrote {} notes", summary.note_count);
//! # Ok::<(), cardforge_deck::DeckError>(())
//! ```

pub mod deck;
pub mod error;
pub mod id;
pub mod media;
pub mod metadata;
pub mod model;
pub mod style;

pub use deck::{package_deck, BuildSummary, DeckSource};
pub use error::{
    DeckError, ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use id::{content_hash, note_guid, qualified_model_id, stable_id};
pub use media::{img_ref, sound_ref, MediaStore};
pub use metadata::{DeckMetadata, DeckMetadataBuilder, DEFAULT_AUTHOR, MAX_TITLE_LEN};
pub use model::{CardTemplate, Note, NoteModel};
pub use style::{css_with_extras, DEFAULT_CSS};
