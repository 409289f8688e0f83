//! Stable identifier derivation.
//!
//! Deck ids, model ids, and note GUIDs are all derived from human-readable
//! identifying strings via BLAKE3, so repeated builds of the same deck
//! produce identical identifiers and re-imports update cards in place
//! instead of duplicating them.

use crate::metadata::DeckMetadata;

/// Mask keeping identifiers in the positive 31-bit range the packaging
/// target stores them in.
const ID_MASK: u32 = (1 << 31) - 1;

/// Derives a stable 31-bit identifier from a prefix and deck metadata.
///
/// ```text
/// id = truncate_u32(BLAKE3("{prefix}-{title}-{author}-{version}")) & (2^31 - 1)
/// ```
///
/// # Arguments
/// * `prefix` - Namespace for the id ("deck", "model", ...)
/// * `metadata` - The deck metadata supplying title/author/version
pub fn stable_id(prefix: &str, metadata: &DeckMetadata) -> i64 {
    derive_id(&format!(
        "{}-{}-{}-{}",
        prefix, metadata.title, metadata.author, metadata.version
    ))
}

/// Derives a model id qualified by a model name.
///
/// Deck families that ship several models (e.g., one per card direction)
/// mix the model name into the hash so each model gets its own id.
pub fn qualified_model_id(metadata: &DeckMetadata, model_name: &str) -> i64 {
    derive_id(&format!(
        "model-{}-{}-{}-{}",
        model_name, metadata.title, metadata.author, metadata.version
    ))
}

/// Derives a stable note GUID from a model id and a per-card natural key.
///
/// Returns the first 16 hex characters of the BLAKE3 hash; the flashcard
/// application treats GUIDs as opaque strings.
pub fn note_guid(model_id: i64, key: &str) -> String {
    let hash = blake3::hash(format!("{}-{}", model_id, key).as_bytes());
    hash.to_hex().as_str()[..16].to_string()
}

fn derive_id(input: &str) -> i64 {
    let hash = blake3::hash(input.as_bytes());
    let bytes: [u8; 4] = hash.as_bytes()[0..4]
        .try_into()
        .expect("BLAKE3 output is at least 4 bytes");
    i64::from(u32::from_le_bytes(bytes) & ID_MASK)
}

/// Computes a BLAKE3 hash of arbitrary data as a 64-character hex string.
pub fn content_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
