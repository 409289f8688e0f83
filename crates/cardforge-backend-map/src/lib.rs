//! CardForge map backend.
//!
//! Renders region outline images for geography decks: a minimal GeoJSON
//! reader for Polygon/MultiPolygon features, a Mollweide projection, an
//! RGBA rasterizer with even-odd fill and Bresenham strokes, and a
//! deterministic PNG encoder. Flag images are fetched from a CDN; every
//! other step is pure arithmetic, so equal inputs produce byte-identical
//! images.

pub mod error;
pub mod flags;
pub mod geojson;
pub mod png;
pub mod projection;
pub mod raster;
pub mod render;

pub use error::MapError;
pub use flags::{fetch_flag, flag_url};
pub use geojson::{load_regions, parse_regions, Region};
pub use png::{write_canvas, write_canvas_to_vec_with_hash, PngConfig};
pub use projection::project;
pub use raster::{Canvas, Color};
pub use render::{neighbors, region_by_name, render_answer, render_question, RenderOptions};
