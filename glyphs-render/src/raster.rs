//! Rasterizer seam: turns one code point into a coverage mask.
//!
//! The icon renderer only needs a tight alpha bitmap of the glyph; it
//! does the colouring and placement itself. [`crate::CosmicHost`] is the
//! production implementation.

use glyphs_core::Rgba;

use crate::error::RenderError;
use crate::pixmap::Pixmap;

/// What to rasterize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphRequest<'a> {
    /// Registered family name of the face.
    pub family: &'a str,
    /// Face weight (regular and solid share a family).
    pub weight: u16,
    pub glyph: char,
    /// Font size in device pixels.
    pub pixel_size: f32,
}

/// Tight alpha bitmap of a glyph, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    /// `width * height` coverage values, 0 = empty, 255 = fully covered.
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    pub fn new(width: u32, height: u32, coverage: Vec<u8>) -> Self {
        debug_assert_eq!(coverage.len(), width as usize * height as usize);
        Self {
            width,
            height,
            coverage,
        }
    }

    /// Paint the mask centred on `pixmap`, filled with `colour`.
    ///
    /// Parts of the mask falling outside the pixmap are clipped.
    pub fn draw_centered(&self, pixmap: &mut Pixmap, colour: Rgba) {
        let off_x = (pixmap.width() as i64 - self.width as i64) / 2;
        let off_y = (pixmap.height() as i64 - self.height as i64) / 2;

        for (row, line) in self
            .coverage
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .enumerate()
        {
            let y = off_y + row as i64;
            if y < 0 || y >= pixmap.height() as i64 {
                continue;
            }
            for (col, &cov) in line.iter().enumerate() {
                let x = off_x + col as i64;
                if cov == 0 || x < 0 || x >= pixmap.width() as i64 {
                    continue;
                }
                pixmap.set(x as u32, y as u32, colour.with_coverage(cov));
            }
        }
    }
}

/// Produces glyph masks for the icon renderer.
pub trait GlyphRasterizer {
    fn rasterize(&mut self, request: &GlyphRequest<'_>) -> Result<GlyphMask, RenderError>;
}
