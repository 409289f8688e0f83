//! World regions geography deck.
//!
//! One card per region in a GeoJSON file: the question shows the region's
//! outline alone, the answer shows it highlighted among its neighbours
//! with the region name and (when available) its flag.

use std::path::PathBuf;

use cardforge_backend_map::{
    fetch_flag, load_regions, render_answer, render_question, write_canvas_to_vec_with_hash,
    PngConfig, RenderOptions,
};
use cardforge_deck::{
    img_ref, note_guid, qualified_model_id, CardTemplate, DeckError, DeckMetadata, DeckSource,
    MediaStore, Note, NoteModel,
};

const REGIONS_CSS: &str = "\
.card {
    font-family: Arial, sans-serif;
    background-color: #1a1a1a;
    color: #ffffff;
}
.question {
    display: flex;
    justify-content: center;
    padding: 20px;
}
.question img {
    max-width: 80%;
    max-height: 80vh;
}
.answer-container {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 20px;
}
.outline-image {
    max-width: 80%;
    max-height: 50vh;
    margin-bottom: 20px;
}
.flag-name-container {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 15px;
    margin-top: 10px;
}
.region-flag {
    height: 30px;
    width: auto;
    vertical-align: middle;
}
.region-name {
    font-size: 24px;
    color: #ffffff;
    margin: 0;
    vertical-align: middle;
}
";

/// Geography deck built from a regions GeoJSON file.
#[derive(Debug)]
pub struct WorldRegionsDeck {
    metadata: DeckMetadata,
    regions_path: PathBuf,
    render: RenderOptions,
    fetch_flags: bool,
}

impl WorldRegionsDeck {
    /// Creates the deck.
    ///
    /// # Arguments
    /// * `regions_path` - Path to a GeoJSON file of region features
    /// * `image_size` - Outline image size in pixels (square)
    /// * `fetch_flags` - Whether to download flag images
    pub fn new(regions_path: impl Into<PathBuf>, image_size: u32, fetch_flags: bool) -> Self {
        let metadata = DeckMetadata::builder("World Regions")
            .tag("geography")
            .tag("territories")
            .tag("regions")
            .tag("maps")
            .description("A deck for learning geographic regions and territories on world maps")
            .build();
        Self {
            metadata,
            regions_path: regions_path.into(),
            render: RenderOptions { size: image_size },
            fetch_flags,
        }
    }
}

impl DeckSource for WorldRegionsDeck {
    fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    fn model(&self) -> NoteModel {
        NoteModel::new(
            qualified_model_id(&self.metadata, "World Regions Model"),
            "World Regions Model",
            vec!["Question", "Answer"],
            vec![CardTemplate::new(
                "Region Card",
                "<div class=\"question\">{{Question}}</div>",
                "<div class=\"answer-container\">{{Answer}}</div>",
            )],
            REGIONS_CSS,
        )
    }

    fn notes(&self, media: &mut MediaStore) -> Result<Vec<Note>, DeckError> {
        let model_id = self.model().id;
        let world =
            load_regions(&self.regions_path).map_err(|e| DeckError::Generation(e.to_string()))?;
        let png_config = PngConfig::default();

        let mut notes = Vec::with_capacity(world.len());
        for region in &world {
            let question = render_question(region, &self.render)
                .map_err(|e| DeckError::Generation(e.to_string()))?;
            let answer = render_answer(region, &world, &self.render)
                .map_err(|e| DeckError::Generation(e.to_string()))?;
            let (question_png, _) = write_canvas_to_vec_with_hash(&question, &png_config)
                .map_err(|e| DeckError::Generation(e.to_string()))?;
            let (answer_png, _) = write_canvas_to_vec_with_hash(&answer, &png_config)
                .map_err(|e| DeckError::Generation(e.to_string()))?;

            let question_name = format!("outline_q_{}.png", region.iso_a2);
            let answer_name = format!("outline_a_{}.png", region.iso_a2);
            media.add(&question_name, &question_png)?;
            media.add(&answer_name, &answer_png)?;

            let flag_html = if self.fetch_flags {
                match fetch_flag(&region.iso_a2) {
                    Ok(bytes) => {
                        let flag_name = format!("flag_{}.png", region.iso_a2);
                        media.add(&flag_name, &bytes)?;
                        format!("<img src=\"{}\" class=\"region-flag\">", flag_name)
                    }
                    Err(e) => {
                        // The card still works without a flag.
                        eprintln!("warning: {} ({})", e, region.name);
                        String::new()
                    }
                }
            } else {
                String::new()
            };

            notes.push(Note::new(
                vec![
                    img_ref(&question_name),
                    format!(
                        "<img src=\"{}\" class=\"outline-image\">\
                         <div class=\"flag-name-container\">{}\
                         <span class=\"region-name\">{}</span></div>",
                        answer_name, flag_html, region.name
                    ),
                ],
                note_guid(model_id, &region.iso_a2),
                self.metadata.tags.clone(),
            ));
        }
        Ok(notes)
    }
}
