//! Region outline rendering.
//!
//! Question images show the region alone, filled near-white on a dark
//! background. Answer images add the boundaries of neighbouring regions
//! in dark gray and highlight the region itself in translucent red with a
//! white outline. Both sides share one viewport: the region's projected
//! bounding box padded by 20%, letterboxed into a square canvas.

use crate::error::MapError;
use crate::geojson::Region;
use crate::projection::project_ring;
use crate::raster::{Canvas, Color};

/// Canvas background.
pub const BACKGROUND: Color = Color::rgb(0x1a, 0x1a, 0x1a);
/// Question-side region fill (near-opaque white).
pub const QUESTION_FILL: Color = Color::rgba(0xff, 0xff, 0xff, 230);
/// Region outline.
pub const OUTLINE: Color = Color::rgb(0xff, 0xff, 0xff);
/// Neighbour boundary color on the answer side.
pub const NEIGHBOR_BOUNDARY: Color = Color::rgb(0x40, 0x40, 0x40);
/// Answer-side region highlight (translucent red).
pub const HIGHLIGHT_FILL: Color = Color::rgba(0xff, 0x44, 0x44, 128);

/// Fraction of the larger bounding-box dimension added as padding.
const PADDING_FRACTION: f64 = 0.2;
/// Fraction of the larger bounding-box dimension used to find neighbours.
const NEIGHBOR_FRACTION: f64 = 0.5;

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output image size (square), in pixels.
    pub size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { size: 640 }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn from_rings(rings: &[Vec<(f64, f64)>]) -> Option<Self> {
        let mut points = rings.iter().flatten();
        let &(x, y) = points.next()?;
        let mut bounds = Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        };
        for &(x, y) in points {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn larger(&self) -> f64 {
        self.width().max(self.height())
    }

    fn inflate(&self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

/// Maps projected coordinates into pixel space: uniform scale, centered,
/// y flipped (north up).
#[derive(Debug, Clone, Copy)]
struct Viewport {
    scale: f64,
    center_x: f64,
    center_y: f64,
    size: f64,
}

impl Viewport {
    fn new(bounds: &Bounds, size: u32) -> Self {
        let padded = bounds.inflate(bounds.larger() * PADDING_FRACTION);
        let extent = padded.width().max(padded.height()).max(f64::EPSILON);
        Self {
            scale: f64::from(size) / extent,
            center_x: (padded.min_x + padded.max_x) / 2.0,
            center_y: (padded.min_y + padded.max_y) / 2.0,
            size: f64::from(size),
        }
    }

    fn to_pixels(&self, ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
        ring.iter()
            .map(|&(x, y)| {
                (
                    (x - self.center_x) * self.scale + self.size / 2.0,
                    (self.center_y - y) * self.scale + self.size / 2.0,
                )
            })
            .collect()
    }
}

/// A region's polygons in projected coordinates, one ring list per polygon.
fn projected_polygons(region: &Region) -> Vec<Vec<Vec<(f64, f64)>>> {
    region
        .polygons
        .iter()
        .map(|polygon| polygon.iter().map(|ring| project_ring(ring)).collect())
        .collect()
}

fn all_rings(polygons: &[Vec<Vec<(f64, f64)>>]) -> Vec<Vec<(f64, f64)>> {
    polygons.iter().flatten().cloned().collect()
}

fn region_bounds(region: &Region) -> Result<Bounds, MapError> {
    Bounds::from_rings(&all_rings(&projected_polygons(region)))
        .ok_or_else(|| MapError::EmptyGeometry(region.name.clone()))
}

/// Looks up a region by name.
pub fn region_by_name<'a>(world: &'a [Region], name: &str) -> Result<&'a Region, MapError> {
    world
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| MapError::UnknownRegion(name.to_string()))
}

/// Finds regions whose projected bounding box touches `region`'s bounding
/// box expanded by half its larger dimension. A bounding-box stand-in for
/// geometric buffering, which overmatches slightly but never misses a
/// bordering region.
pub fn neighbors<'a>(region: &Region, world: &'a [Region]) -> Result<Vec<&'a Region>, MapError> {
    let search = region_bounds(region)?;
    let search = search.inflate(search.larger() * NEIGHBOR_FRACTION);
    Ok(world
        .iter()
        .filter(|other| other.name != region.name)
        .filter(|other| {
            region_bounds(other)
                .map(|b| b.intersects(&search))
                .unwrap_or(false)
        })
        .collect())
}

fn draw_region(canvas: &mut Canvas, region: &Region, viewport: &Viewport, fill: Color) {
    for polygon in projected_polygons(region) {
        let pixel_rings: Vec<Vec<(f64, f64)>> =
            polygon.iter().map(|ring| viewport.to_pixels(ring)).collect();
        canvas.fill_rings(&pixel_rings, fill);
        for ring in &pixel_rings {
            canvas.stroke_ring(ring, OUTLINE);
        }
    }
}

/// Renders the question side: the region alone, filled near-white.
pub fn render_question(region: &Region, options: &RenderOptions) -> Result<Canvas, MapError> {
    let bounds = region_bounds(region)?;
    let viewport = Viewport::new(&bounds, options.size);
    let mut canvas = Canvas::new(options.size, options.size, BACKGROUND);
    draw_region(&mut canvas, region, &viewport, QUESTION_FILL);
    Ok(canvas)
}

/// Renders the answer side: neighbour boundaries in gray, the region
/// highlighted translucent red with a white outline.
pub fn render_answer(
    region: &Region,
    world: &[Region],
    options: &RenderOptions,
) -> Result<Canvas, MapError> {
    let bounds = region_bounds(region)?;
    let viewport = Viewport::new(&bounds, options.size);
    let mut canvas = Canvas::new(options.size, options.size, BACKGROUND);

    for neighbor in neighbors(region, world)? {
        for polygon in projected_polygons(neighbor) {
            for ring in &polygon {
                canvas.stroke_ring(&viewport.to_pixels(ring), NEIGHBOR_BOUNDARY);
            }
        }
    }
    draw_region(&mut canvas, region, &viewport, HIGHLIGHT_FILL);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, iso: &str, ring: Vec<(f64, f64)>) -> Region {
        Region {
            name: name.to_string(),
            iso_a2: iso.to_string(),
            polygons: vec![vec![ring]],
        }
    }

    fn square(name: &str, iso: &str, x: f64, y: f64, side: f64) -> Region {
        region(
            name,
            iso,
            vec![(x, y), (x + side, y), (x + side, y + side), (x, y + side)],
        )
    }

    #[test]
    fn test_question_has_fill_and_background() {
        let r = square("Squareland", "SQ", 0.0, 0.0, 10.0);
        let canvas = render_question(&r, &RenderOptions { size: 64 }).unwrap();
        // Center of the canvas is inside the region.
        let center = canvas.get(32, 32).unwrap();
        assert!(center.r > 200);
        // Corners are padding, so they keep the background.
        assert_eq!(canvas.get(0, 0).unwrap(), BACKGROUND);
    }

    #[test]
    fn test_answer_highlights_in_red() {
        let r = square("Squareland", "SQ", 0.0, 0.0, 10.0);
        let canvas = render_answer(&r, &[r.clone()], &RenderOptions { size: 64 }).unwrap();
        let center = canvas.get(32, 32).unwrap();
        assert!(center.r > center.g);
        assert!(center.r > center.b);
    }

    #[test]
    fn test_neighbors_by_proximity() {
        let home = square("Home", "HM", 0.0, 0.0, 10.0);
        let near = square("Near", "NE", 11.0, 0.0, 10.0);
        let far = square("Far", "FA", 120.0, 0.0, 10.0);
        let world = vec![home.clone(), near, far];
        let found = neighbors(&home, &world).unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Near"]);
    }

    #[test]
    fn test_region_by_name() {
        let world = vec![square("Home", "HM", 0.0, 0.0, 10.0)];
        assert!(region_by_name(&world, "Home").is_ok());
        assert!(matches!(
            region_by_name(&world, "Atlantis"),
            Err(MapError::UnknownRegion(_))
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let r = square("Squareland", "SQ", 0.0, 0.0, 10.0);
        let opts = RenderOptions { size: 64 };
        let a = render_question(&r, &opts).unwrap();
        let b = render_question(&r, &opts).unwrap();
        assert_eq!(a.to_rgba8(), b.to_rgba8());
    }
}
