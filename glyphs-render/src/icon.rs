//! Icon renderer: draws one named glyph as a coloured, multi-density
//! icon.
//!
//! For every configured scale the glyph is rasterized at
//! `point_size * scale` pixels and centred on a transparent square of
//! the same side. Nothing is cached; each call re-rasterizes.

use std::sync::Arc;

use glyphs_core::{GlyphEntry, GlyphRegistry, Rgba, Variant};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::pixmap::Pixmap;
use crate::raster::{GlyphMask, GlyphRasterizer, GlyphRequest};

/// Largest pixmap side the renderer will allocate.
pub const MAX_PIXMAP_SIDE: u32 = 4096;

// ── Configuration ───────────────────────────────────────────────────

/// Icon rendering options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Pixel densities to render, e.g. `[1, 2]` for standard + HiDPI.
    pub scales: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self { scales: vec![1, 2] }
    }
}

impl IconConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.scales.is_empty() {
            return Err(RenderError::InvalidConfig("no scales configured".into()));
        }
        if self.scales.contains(&0) {
            return Err(RenderError::InvalidConfig("scale must be at least 1".into()));
        }
        Ok(())
    }
}

// ── Rendered icons ──────────────────────────────────────────────────

/// A rendered glyph at one or more pixel densities.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    pub glyph: GlyphEntry,
    pub point_size: u32,
    pub colour: Rgba,
    /// One pixmap per configured scale, in ascending scale order.
    pixmaps: Vec<Pixmap>,
}

impl Icon {
    /// Size in logical pixels.
    pub fn logical_size(&self) -> (u32, u32) {
        (self.point_size, self.point_size)
    }

    pub fn pixmaps(&self) -> &[Pixmap] {
        &self.pixmaps
    }

    /// The pixmap rendered at exactly `scale`.
    pub fn pixmap(&self, scale: u32) -> Option<&Pixmap> {
        self.pixmaps.iter().find(|p| p.scale() == scale)
    }

    /// The pixmap to show on a surface with `device_scale` pixels per
    /// logical pixel: the smallest one at least that dense, else the
    /// densest available.
    pub fn best_pixmap(&self, device_scale: f32) -> Option<&Pixmap> {
        self.pixmaps
            .iter()
            .find(|p| p.scale() as f32 >= device_scale)
            .or_else(|| self.pixmaps.last())
    }
}

// ── Renderer ────────────────────────────────────────────────────────

/// Renders icons for glyphs resolved through a shared registry.
pub struct IconRenderer<R> {
    registry: Arc<GlyphRegistry>,
    rasterizer: R,
    scales: Vec<u32>,
}

impl<R: GlyphRasterizer> IconRenderer<R> {
    pub fn new(
        registry: Arc<GlyphRegistry>,
        rasterizer: R,
        config: &IconConfig,
    ) -> Result<Self, RenderError> {
        config.validate()?;
        let mut scales = config.scales.clone();
        scales.sort_unstable();
        scales.dedup();
        Ok(Self {
            registry,
            rasterizer,
            scales,
        })
    }

    pub fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Scales rendered for every icon, ascending.
    pub fn scales(&self) -> &[u32] {
        &self.scales
    }

    /// Render `glyph_name` in its canonical face.
    ///
    /// Unknown names are an error; no placeholder glyph is substituted.
    pub fn icon(
        &mut self,
        glyph_name: &str,
        point_size: u32,
        colour: Rgba,
    ) -> Result<Icon, RenderError> {
        let entry = self.registry.lookup(glyph_name)?;
        self.render(entry, point_size, colour)
    }

    /// Render `glyph_name` from a specific face, e.g. the regular star.
    pub fn icon_in(
        &mut self,
        variant: Variant,
        glyph_name: &str,
        point_size: u32,
        colour: Rgba,
    ) -> Result<Icon, RenderError> {
        let entry = self.registry.lookup_in(variant, glyph_name)?;
        self.render(entry, point_size, colour)
    }

    /// Render an already resolved glyph.
    pub fn render(
        &mut self,
        glyph: GlyphEntry,
        point_size: u32,
        colour: Rgba,
    ) -> Result<Icon, RenderError> {
        let largest = self.scales.last().copied().unwrap_or(1);
        match point_size.checked_mul(largest) {
            Some(side) if point_size > 0 && side <= MAX_PIXMAP_SIDE => {}
            _ => return Err(RenderError::InvalidPointSize(point_size)),
        }

        let mut pixmaps = Vec::with_capacity(self.scales.len());
        for scale in self.scales.clone() {
            pixmaps.push(self.render_pixmap(&glyph, point_size * scale, scale, colour)?);
        }

        log::debug!(
            "rendered icon '{}' ({} {}pt) at scales {:?}",
            glyph.name,
            glyph.variant,
            point_size,
            self.scales,
        );

        Ok(Icon {
            glyph,
            point_size,
            colour,
            pixmaps,
        })
    }

    fn render_pixmap(
        &mut self,
        glyph: &GlyphEntry,
        side: u32,
        scale: u32,
        colour: Rgba,
    ) -> Result<Pixmap, RenderError> {
        let face = self.registry.face(glyph.variant);
        let mut request = GlyphRequest {
            family: &face.family,
            weight: face.weight,
            glyph: glyph.code_point,
            pixel_size: side as f32,
        };

        let mut mask = self.rasterizer.rasterize(&request)?;
        if let Some(fit) = shrink_to_fit(&mask, side) {
            // Wide glyphs overflow the em square; redraw them smaller.
            request.pixel_size *= fit;
            mask = self.rasterizer.rasterize(&request)?;
        }

        let mut pixmap = Pixmap::new(side, side, scale);
        mask.draw_centered(&mut pixmap, colour);
        Ok(pixmap)
    }
}

// ── Fitting ─────────────────────────────────────────────────────────

/// Factor that makes `mask` fit a `side` square, if it overflows.
fn shrink_to_fit(mask: &GlyphMask, side: u32) -> Option<f32> {
    let extent = mask.width.max(mask.height);
    (extent > side).then(|| side as f32 / extent as f32)
}
