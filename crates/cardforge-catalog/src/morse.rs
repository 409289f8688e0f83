//! Morse code decks.
//!
//! One deck family, three directions: character to audio/pattern, written
//! pattern to character, and audio to character. All three share the same
//! fields and media; only the templates differ in which side shows what.

use cardforge_backend_audio::{render_morse, MorseTiming, WavResult, DEFAULT_SAMPLE_RATE, MORSE_TABLE};
use cardforge_deck::{
    css_with_extras, note_guid, qualified_model_id, sound_ref, CardTemplate, DeckError,
    DeckMetadata, DeckSource, MediaStore, Note, NoteModel,
};

const MORSE_CSS: &str = "\
.content {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5em;
}
.character {
    font-size: 4em;
    font-weight: 600;
    color: #e0e0e0;
}
.morse {
    font-family: 'Courier New', monospace;
    font-size: 2.5em;
    color: #cccccc;
    letter-spacing: 0.1em;
}
.audio-controls {
    margin-top: 1em;
    padding: 0.75em 1.5em;
    background: rgba(255, 255, 255, 0.1);
    border-radius: 8px;
    display: inline-flex;
    align-items: center;
    gap: 0.5em;
}
";

/// Which side of the character/pattern/audio triple the question shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseDirection {
    /// Question: the character. Answer: pattern and audio.
    CharToAudio,
    /// Question: the written pattern. Answer: character and audio.
    VisualToChar,
    /// Question: the audio. Answer: character and pattern.
    AudioToChar,
}

impl MorseDirection {
    /// Catalog id for this direction's deck.
    pub fn deck_id(&self) -> &'static str {
        match self {
            MorseDirection::CharToAudio => "morse-char-to-audio",
            MorseDirection::VisualToChar => "morse-visual-to-char",
            MorseDirection::AudioToChar => "morse-audio-to-char",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            MorseDirection::CharToAudio => "Morse Code: Character to Audio/Visual Morse",
            MorseDirection::VisualToChar => "Morse Code: Visual Morse to Character/Audio Morse",
            MorseDirection::AudioToChar => "Morse Code: Audio Morse to Character/Visual Morse",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            MorseDirection::CharToAudio => "Practice converting characters to Morse code",
            MorseDirection::VisualToChar => "Practice converting written Morse code to characters",
            MorseDirection::AudioToChar => "Practice identifying characters from Morse code audio",
        }
    }

    fn model_name(&self) -> &'static str {
        match self {
            MorseDirection::CharToAudio => "Visual to Morse Model",
            MorseDirection::VisualToChar => "Morse to Visual Model",
            MorseDirection::AudioToChar => "Audio to Visual Model",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            MorseDirection::CharToAudio => "visual-to-morse",
            MorseDirection::VisualToChar => "morse-to-visual",
            MorseDirection::AudioToChar => "audio-to-visual",
        }
    }

    fn template(&self) -> CardTemplate {
        let (name, qfmt, afmt) = match self {
            MorseDirection::CharToAudio => (
                "Visual to Morse",
                "<div class=\"content\"><div class=\"character\">{{Character}}</div></div>",
                "{{FrontSide}}<hr><div class=\"content\"><div class=\"morse\">{{MorseCode}}</div>\
                 <div class=\"audio-controls\">{{Audio}}</div></div>",
            ),
            MorseDirection::VisualToChar => (
                "Morse to Character",
                "<div class=\"content\"><div class=\"morse\">{{MorseCode}}</div></div>",
                "{{FrontSide}}<hr><div class=\"content\"><div class=\"character\">{{Character}}</div>\
                 <div class=\"audio-controls\">{{Audio}}</div></div>",
            ),
            MorseDirection::AudioToChar => (
                "Audio to Character",
                "<div class=\"content\"><div class=\"audio-controls\">{{Audio}}</div></div>",
                "{{FrontSide}}<hr><div class=\"content\"><div class=\"character\">{{Character}}</div>\
                 <div class=\"morse\">{{MorseCode}}</div></div>",
            ),
        };
        CardTemplate::new(name, qfmt, afmt)
    }
}

/// A Morse code deck for one direction.
#[derive(Debug)]
pub struct MorseDeck {
    direction: MorseDirection,
    metadata: DeckMetadata,
    timing: MorseTiming,
}

impl MorseDeck {
    /// Creates the deck for a direction.
    pub fn new(direction: MorseDirection) -> Self {
        let metadata = DeckMetadata::builder(direction.title())
            .tag("morse-code")
            .tag(direction.tag())
            .description(direction.description())
            .build();
        Self {
            direction,
            metadata,
            timing: MorseTiming::default(),
        }
    }
}

impl DeckSource for MorseDeck {
    fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    fn model(&self) -> NoteModel {
        NoteModel::new(
            qualified_model_id(&self.metadata, self.direction.model_name()),
            self.direction.model_name(),
            vec!["Character", "MorseCode", "Audio"],
            vec![self.direction.template()],
            css_with_extras(MORSE_CSS),
        )
    }

    fn notes(&self, media: &mut MediaStore) -> Result<Vec<Note>, DeckError> {
        let model_id = self.model().id;
        let tags = self.metadata.tags.clone();

        let mut notes = Vec::with_capacity(MORSE_TABLE.len());
        for (character, pattern) in MORSE_TABLE {
            let samples = render_morse(pattern, &self.timing, DEFAULT_SAMPLE_RATE)
                .map_err(|e| DeckError::Generation(e.to_string()))?;
            let wav = WavResult::from_mono(&samples, DEFAULT_SAMPLE_RATE);
            let filename = format!("morse_{}.wav", character);
            media.add(&filename, &wav.wav_data)?;

            notes.push(Note::new(
                vec![
                    character.to_string(),
                    pattern.to_string(),
                    sound_ref(&filename),
                ],
                note_guid(model_id, &character.to_string()),
                tags.clone(),
            ));
        }
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_characters_become_notes() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = MorseDeck::new(MorseDirection::CharToAudio);
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        assert_eq!(notes.len(), 36);
        assert_eq!(media.len(), 36);
    }

    #[test]
    fn test_note_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = MorseDeck::new(MorseDirection::VisualToChar);
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        let a = &notes[0];
        assert_eq!(a.fields, vec!["A", ".-", "[sound:morse_A.wav]"]);
        assert!(a.tags.contains(&"morse-to-visual".to_string()));
    }

    #[test]
    fn test_directions_have_distinct_models_and_guids() {
        let char_deck = MorseDeck::new(MorseDirection::CharToAudio);
        let audio_deck = MorseDeck::new(MorseDirection::AudioToChar);
        assert_ne!(char_deck.model().id, audio_deck.model().id);

        let tmp = tempfile::tempdir().unwrap();
        let mut media_a = MediaStore::new(tmp.path().join("a")).unwrap();
        let mut media_b = MediaStore::new(tmp.path().join("b")).unwrap();
        let notes_a = char_deck.notes(&mut media_a).unwrap();
        let notes_b = audio_deck.notes(&mut media_b).unwrap();
        assert_ne!(notes_a[0].guid, notes_b[0].guid);
    }

    #[test]
    fn test_guids_stable_across_builds() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = MorseDeck::new(MorseDirection::CharToAudio);
        let mut media_a = MediaStore::new(tmp.path().join("a")).unwrap();
        let mut media_b = MediaStore::new(tmp.path().join("b")).unwrap();
        let first = deck.notes(&mut media_a).unwrap();
        let second = deck.notes(&mut media_b).unwrap();
        assert_eq!(first[0].guid, second[0].guid);
    }
}
