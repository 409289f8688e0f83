//! CardForge deck catalog.
//!
//! The set of decks this workspace knows how to build, keyed by a stable
//! string id. The CLI lists [`DECK_IDS`] and instantiates decks through
//! [`create`].

use std::path::PathBuf;

use cardforge_deck::{DeckError, DeckSource};

pub mod java;
pub mod morse;
pub mod pitch;
pub mod practice;
pub mod regions;

pub use java::JavaFundamentalsDeck;
pub use morse::{MorseDeck, MorseDirection};
pub use pitch::PerfectPitchDeck;
pub use practice::JavaPracticeDeck;
pub use regions::WorldRegionsDeck;

/// Default shuffle seed for decks with a randomized initial order.
pub const DEFAULT_SEED: u64 = 42;

/// Default region outline image size in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 640;

/// Ids of every deck in the catalog, in build order.
pub const DECK_IDS: [&str; 7] = [
    "morse-char-to-audio",
    "morse-visual-to-char",
    "morse-audio-to-char",
    "perfect-pitch",
    "java-fundamentals",
    "java-practice",
    "world-regions",
];

/// Options shared by all deck constructors.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Shuffle seed for randomized decks.
    pub seed: u64,
    /// GeoJSON file for the world regions deck.
    pub regions_path: Option<PathBuf>,
    /// Region outline image size in pixels.
    pub image_size: u32,
    /// Whether network-backed media (flags) is fetched.
    pub fetch_flags: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            regions_path: None,
            image_size: DEFAULT_IMAGE_SIZE,
            fetch_flags: true,
        }
    }
}

/// Returns true if building `deck_id` requires network access.
pub fn requires_network(deck_id: &str, options: &BuildOptions) -> bool {
    deck_id == "world-regions" && options.fetch_flags
}

/// Instantiates a deck by id.
///
/// # Errors
/// * [`DeckError::UnknownDeck`] for an id not in [`DECK_IDS`]
/// * [`DeckError::Generation`] when the deck needs inputs the options
///   do not provide (e.g. a regions file)
pub fn create(deck_id: &str, options: &BuildOptions) -> Result<Box<dyn DeckSource>, DeckError> {
    match deck_id {
        "morse-char-to-audio" => Ok(Box::new(MorseDeck::new(MorseDirection::CharToAudio))),
        "morse-visual-to-char" => Ok(Box::new(MorseDeck::new(MorseDirection::VisualToChar))),
        "morse-audio-to-char" => Ok(Box::new(MorseDeck::new(MorseDirection::AudioToChar))),
        "perfect-pitch" => Ok(Box::new(PerfectPitchDeck::new(options.seed))),
        "java-fundamentals" => Ok(Box::new(JavaFundamentalsDeck::new())),
        "java-practice" => Ok(Box::new(JavaPracticeDeck::new())),
        "world-regions" => {
            let path = options.regions_path.clone().ok_or_else(|| {
                DeckError::Generation(
                    "world regions deck requires a regions GeoJSON file".to_string(),
                )
            })?;
            Ok(Box::new(WorldRegionsDeck::new(
                path,
                options.image_size,
                options.fetch_flags,
            )))
        }
        other => Err(DeckError::UnknownDeck(other.to_string())),
    }
}
