//! Perfect pitch training deck.
//!
//! One card per note from C3 to B5. Cards are shuffled with a seeded
//! generator so the initial review order is not chromatic but rebuilds
//! with the same seed are identical.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use cardforge_backend_audio::{note_frequency, piano_tone, WavResult, DEFAULT_SAMPLE_RATE, NOTE_NAMES};
use cardforge_deck::{
    note_guid, qualified_model_id, sound_ref, CardTemplate, DeckError, DeckMetadata, DeckSource,
    MediaStore, Note, NoteModel,
};

/// Octave range of the deck, inclusive.
const OCTAVES: std::ops::RangeInclusive<i32> = 3..=5;

/// Note length in seconds.
const NOTE_DURATION: f64 = 1.0;

const PITCH_CSS: &str = "\
.card {
    font-family: Arial, sans-serif;
    font-size: 28px;
    text-align: center;
    color: black;
    background-color: white;
    padding: 20px;
}
.question {
    margin-top: 20px;
}
.answer {
    margin-top: 20px;
}
.note {
    color: #2196F3;
    font-weight: bold;
    font-size: 36px;
}
.details {
    color: #666;
    font-size: 18px;
    margin-top: 10px;
}
";

/// Ear-training deck: hear a piano note, name it.
#[derive(Debug)]
pub struct PerfectPitchDeck {
    metadata: DeckMetadata,
    seed: u64,
}

impl PerfectPitchDeck {
    /// Creates the deck with a shuffle seed.
    pub fn new(seed: u64) -> Self {
        let metadata = DeckMetadata::builder("Perfect Pitch Training")
            .tag("music")
            .tag("ear-training")
            .tag("perfect-pitch")
            .description("A deck designed to help develop perfect pitch through ear training exercises.")
            .build();
        Self { metadata, seed }
    }
}

impl DeckSource for PerfectPitchDeck {
    fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    fn model(&self) -> NoteModel {
        NoteModel::new(
            qualified_model_id(&self.metadata, "Perfect Pitch Training"),
            "Perfect Pitch Training",
            vec!["Audio", "Note", "Octave", "Frequency"],
            vec![CardTemplate::new(
                "Perfect Pitch Card",
                "{{Audio}}<div class=\"question\">What note is this?</div>",
                "{{Audio}}<div class=\"answer\"><div class=\"note\">{{Note}}</div>\
                 <div class=\"details\">Octave: {{Octave}}<br>Frequency: {{Frequency}} Hz</div></div>",
            )],
            PITCH_CSS,
        )
    }

    fn notes(&self, media: &mut MediaStore) -> Result<Vec<Note>, DeckError> {
        let model_id = self.model().id;

        let mut entries: Vec<(&str, i32)> = OCTAVES
            .flat_map(|octave| NOTE_NAMES.iter().map(move |&name| (name, octave)))
            .collect();
        let mut rng = Pcg32::seed_from_u64(self.seed);
        entries.shuffle(&mut rng);

        let mut notes = Vec::with_capacity(entries.len());
        for (name, octave) in entries {
            let frequency =
                note_frequency(name, octave).map_err(|e| DeckError::Generation(e.to_string()))?;
            let samples = piano_tone(frequency, DEFAULT_SAMPLE_RATE, NOTE_DURATION);
            let wav = WavResult::from_mono(&samples, DEFAULT_SAMPLE_RATE);
            let filename = format!("note_{}{}.wav", name.replace('#', "sharp"), octave);
            media.add(&filename, &wav.wav_data)?;

            notes.push(Note::new(
                vec![
                    sound_ref(&filename),
                    name.to_string(),
                    octave.to_string(),
                    format!("{:.2}", frequency),
                ],
                note_guid(model_id, &format!("{}{}", name, octave)),
                self.metadata.tags.clone(),
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
    fn test_three_octaves_of_notes() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = PerfectPitchDeck::new(42);
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        assert_eq!(notes.len(), 36);
        assert_eq!(media.len(), 36);
    }

    #[test]
    fn test_fields_for_a4() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = PerfectPitchDeck::new(42);
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        let a4 = notes
            .iter()
            .find(|n| n.fields[1] == "A" && n.fields[2] == "4")
            .expect("A4 present");
        assert_eq!(a4.fields[0], "[sound:note_A4.wav]");
        assert_eq!(a4.fields[3], "440.00");
    }

    #[test]
    fn test_sharp_filenames() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = PerfectPitchDeck::new(42);
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        let csharp = notes
            .iter()
            .find(|n| n.fields[1] == "C#" && n.fields[2] == "3")
            .expect("C#3 present");
        assert_eq!(csharp.fields[0], "[sound:note_Csharp3.wav]");
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let tmp = tempfile::tempdir().unwrap();
        let mut media_a = MediaStore::new(tmp.path().join("a")).unwrap();
        let mut media_b = MediaStore::new(tmp.path().join("b")).unwrap();
        let mut media_c = MediaStore::new(tmp.path().join("c")).unwrap();

        let order = |notes: &[Note]| -> Vec<String> {
            notes.iter().map(|n| n.fields[1].clone()).collect()
        };
        let a = order(&PerfectPitchDeck::new(42).notes(&mut media_a).unwrap());
        let b = order(&PerfectPitchDeck::new(42).notes(&mut media_b).unwrap());
        let c = order(&PerfectPitchDeck::new(7).notes(&mut media_c).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
