//! Vertical linear gradient synthesis

use image::RgbImage;

use super::color::Color;
use super::error::{Result, WallpaperError};

/// Dimensions and endpoint colors of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub width: u32,
    pub height: u32,
    pub start: Color,
    pub end: Color,
}

impl GradientSpec {
    pub fn new(width: u32, height: u32, start: Color, end: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WallpaperError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            start,
            end,
        })
    }

    /// Color of row `row`; the first row is `start` and the last is `end`
    pub fn row_color(&self, row: u32) -> Color {
        if self.height == 1 {
            return self.start;
        }
        let t = f64::from(row) / f64::from(self.height - 1);
        let lerp = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::new(
            lerp(self.start.r, self.end.r),
            lerp(self.start.g, self.end.g),
            lerp(self.start.b, self.end.b),
        )
    }

    pub fn render(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);
        for (y, row) in img.enumerate_rows_mut() {
            let pixel = image::Rgb::from(self.row_color(y));
            for (_, _, p) in row {
                *p = pixel;
            }
        }
        img
    }
}

/// Render a `width`x`height` image fading from `start` (top) to `end` (bottom)
pub fn generate(width: u32, height: u32, start: Color, end: Color) -> Result<RgbImage> {
    Ok(GradientSpec::new(width, height, start, end)?.render())
}
