//! RGBA canvas with polygon fill and polyline stroke.

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A fixed-size RGBA image.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at (x, y), or None when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Blends `color` over the pixel at (x, y) using source-over alpha.
    /// Out-of-bounds coordinates are ignored.
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let dst = self.pixels[idx];
        let alpha = u32::from(color.a);
        let inv = 255 - alpha;
        self.pixels[idx] = Color {
            r: ((u32::from(color.r) * alpha + u32::from(dst.r) * inv) / 255) as u8,
            g: ((u32::from(color.g) * alpha + u32::from(dst.g) * inv) / 255) as u8,
            b: ((u32::from(color.b) * alpha + u32::from(dst.b) * inv) / 255) as u8,
            a: 255,
        };
    }

    /// Fills rings with `color` using even-odd scanline coverage.
    ///
    /// Hole rings cancel the exterior ring they sit inside, so polygons
    /// with holes can be filled in one call.
    pub fn fill_rings(&mut self, rings: &[Vec<(f64, f64)>], color: Color) {
        for y in 0..self.height {
            let scan_y = f64::from(y) + 0.5;
            let mut crossings = Vec::new();
            for ring in rings {
                if ring.len() < 2 {
                    continue;
                }
                for i in 0..ring.len() {
                    let (x0, y0) = ring[i];
                    let (x1, y1) = ring[(i + 1) % ring.len()];
                    if (y0 <= scan_y) != (y1 <= scan_y) {
                        crossings.push(x0 + (scan_y - y0) / (y1 - y0) * (x1 - x0));
                    }
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].ceil().max(0.0) as i64;
                let end = pair[1].floor().min(f64::from(self.width) - 1.0) as i64;
                for x in start..=end {
                    self.blend(x, i64::from(y), color);
                }
            }
        }
    }

    /// Strokes the closed outline of a ring with 1-pixel Bresenham lines.
    pub fn stroke_ring(&mut self, ring: &[(f64, f64)], color: Color) {
        if ring.len() < 2 {
            return;
        }
        for i in 0..ring.len() {
            let (x0, y0) = ring[i];
            let (x1, y1) = ring[(i + 1) % ring.len()];
            self.line(
                x0.round() as i64,
                y0.round() as i64,
                x1.round() as i64,
                y1.round() as i64,
                color,
            );
        }
    }

    fn line(&mut self, mut x0: i64, mut y0: i64, x1: i64, y1: i64, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Returns the image as flat RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(0, 0, 0);
    const WHITE: Color = Color::rgb(255, 255, 255);

    fn square_ring() -> Vec<(f64, f64)> {
        vec![(2.0, 2.0), (7.0, 2.0), (7.0, 7.0), (2.0, 7.0)]
    }

    #[test]
    fn test_fill_inside_and_outside() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.fill_rings(&[square_ring()], WHITE);
        assert_eq!(canvas.get(4, 4), Some(WHITE));
        assert_eq!(canvas.get(0, 0), Some(BG));
        assert_eq!(canvas.get(9, 9), Some(BG));
    }

    #[test]
    fn test_fill_with_hole() {
        let mut canvas = Canvas::new(12, 12, BG);
        let outer = vec![(1.0, 1.0), (10.0, 1.0), (10.0, 10.0), (1.0, 10.0)];
        let hole = vec![(4.0, 4.0), (8.0, 4.0), (8.0, 8.0), (4.0, 8.0)];
        canvas.fill_rings(&[outer, hole], WHITE);
        assert_eq!(canvas.get(2, 2), Some(WHITE));
        assert_eq!(canvas.get(6, 6), Some(BG));
    }

    #[test]
    fn test_translucent_blend() {
        let mut canvas = Canvas::new(4, 4, Color::rgb(0, 0, 0));
        canvas.blend(1, 1, Color::rgba(255, 0, 0, 128));
        let blended = canvas.get(1, 1).unwrap();
        assert_eq!(blended.a, 255);
        assert!(blended.r > 120 && blended.r < 135);
        assert_eq!(blended.g, 0);
    }

    #[test]
    fn test_stroke_touches_corners() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.stroke_ring(&square_ring(), WHITE);
        assert_eq!(canvas.get(2, 2), Some(WHITE));
        assert_eq!(canvas.get(7, 7), Some(WHITE));
        assert_eq!(canvas.get(4, 2), Some(WHITE));
        // Interior stays untouched.
        assert_eq!(canvas.get(4, 4), Some(BG));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(4, 4, BG);
        canvas.blend(-1, 0, WHITE);
        canvas.blend(0, 100, WHITE);
        assert_eq!(canvas.get(0, 0), Some(BG));
    }

    #[test]
    fn test_to_rgba8_layout() {
        let canvas = Canvas::new(2, 1, Color::rgba(1, 2, 3, 255));
        assert_eq!(canvas.to_rgba8(), vec![1, 2, 3, 255, 1, 2, 3, 255]);
    }
}
