//! Deterministic PNG writer.
//!
//! Fixed compression and no filtering, so the same canvas always encodes
//! to byte-identical PNG data. The BLAKE3 hash of the encoded bytes is
//! used for change detection in tests and build reports.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::MapError;
use crate::raster::Canvas;

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Fixed for determinism.
    pub compression: Compression,
    /// Filter type. Fixed for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Encodes a canvas as RGBA PNG to any writer.
pub fn write_canvas_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), MapError> {
    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;
    Ok(())
}

/// Encodes a canvas as RGBA PNG to a file.
pub fn write_canvas(canvas: &Canvas, path: &Path, config: &PngConfig) -> Result<(), MapError> {
    let file = std::fs::File::create(path)?;
    write_canvas_to_writer(canvas, std::io::BufWriter::new(file), config)
}

/// Encodes a canvas to a byte vector and returns the data with its hash.
pub fn write_canvas_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), MapError> {
    let mut data = Vec::new();
    write_canvas_to_writer(canvas, &mut data, config)?;
    let hash = blake3::hash(&data).to_hex().to_string();
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn test_deterministic_encoding() {
        let mut canvas = Canvas::new(32, 32, Color::rgb(26, 26, 26));
        for i in 0..32 {
            canvas.blend(i, i, Color::rgb(255, 68, 68));
        }
        let config = PngConfig::default();
        let (data1, hash1) = write_canvas_to_vec_with_hash(&canvas, &config).unwrap();
        let (data2, hash2) = write_canvas_to_vec_with_hash(&canvas, &config).unwrap();
        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_png_signature() {
        let canvas = Canvas::new(4, 4, Color::rgb(0, 0, 0));
        let (data, _) = write_canvas_to_vec_with_hash(&canvas, &PngConfig::default()).unwrap();
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_write_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");
        let canvas = Canvas::new(8, 8, Color::rgb(26, 26, 26));
        write_canvas(&canvas, &path, &PngConfig::default()).unwrap();
        assert!(path.exists());
    }
}
