use std::io::Cursor;

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, Rgba, RgbaImage};

use super::input::Point;

/// Pen style for stroke rendering.
#[derive(Debug, Clone, Copy)]
pub struct Pen {
    /// Stroke thickness in pixels.
    pub width: f32,
    pub ink: Rgba<u8>,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            width: 2.5,
            ink: Rgba([17, 17, 17, 255]),
        }
    }
}

impl Pen {
    pub fn new(width: f32, ink: [u8; 4]) -> Self {
        Self {
            width,
            ink: Rgba(ink),
        }
    }
}

/// Off-screen RGBA raster the signature is inked onto. The pixel contents are
/// the export artifact; the capture layer re-paints strokes onto it when the
/// surface is resized.
pub struct Canvas {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        let background = Rgba(background);
        Self {
            image: RgbaImage::from_pixel(width.max(1), height.max(1), background),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.image.width() && y < self.image.height() {
            Some(*self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Stamp a filled dot centered at `center`, clipped to the raster bounds.
    pub fn paint_dot(&mut self, center: Point, pen: &Pen) {
        let radius = (pen.width / 2.0).max(0.5);
        let width = self.image.width() as i64;
        let height = self.image.height() as i64;

        let left = ((center.x - radius).floor() as i64).max(0);
        let right = ((center.x + radius).ceil() as i64).min(width - 1);
        let top = ((center.y - radius).floor() as i64).max(0);
        let bottom = ((center.y + radius).ceil() as i64).min(height - 1);

        for y in top..=bottom {
            for x in left..=right {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(x as u32, y as u32, pen.ink);
                }
            }
        }

        // A tap must always leave ink: thin pens at pixel corners can miss
        // every pixel center in the radius test above.
        let cx = center.x.floor() as i64;
        let cy = center.y.floor() as i64;
        if (0..width).contains(&cx) && (0..height).contains(&cy) {
            self.image.put_pixel(cx as u32, cy as u32, pen.ink);
        }
    }

    /// Paint the straight segment between two points by stamping dots at
    /// roughly one-pixel intervals. Incremental per pointer move, never a
    /// full redraw.
    pub fn paint_segment(&mut self, from: Point, to: Point, pen: &Pen) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let steps = distance.ceil().max(1.0) as u32;

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.paint_dot(Point::new(from.x + dx * t, from.y + dy * t), pen);
        }
    }

    /// Encode the raster as PNG. The encoder writes pixel data only, no
    /// timestamps or ancillary chunks: identical pixels give identical bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("failed to encode signature surface as PNG")?;
        Ok(bytes)
    }

    /// Export as a `data:image/png;base64,…` URI, the payload handed to the
    /// save completion handler.
    pub fn to_data_uri(&self) -> Result<String> {
        let png = self.encode_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&png)
        ))
    }
}
