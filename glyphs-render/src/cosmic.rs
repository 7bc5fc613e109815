//! `cosmic-text` backed font host and rasterizer.
//!
//! A [`CosmicHost`] owns a `FontSystem` (font database + shaping) and a
//! `SwashCache` (glyph rasterization). The same host must be used to
//! register the icon fonts and to render icons, since the registered
//! faces live in its font database.

use std::collections::HashSet;

use cosmic_text::{
    fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent,
    Weight,
};
use glyphs_core::{FontHost, GlyphError, LoadedFace, Variant};

use crate::error::RenderError;
use crate::raster::{GlyphMask, GlyphRasterizer, GlyphRequest};

const DEFAULT_LOCALE: &str = "en-US";

// ── Host ────────────────────────────────────────────────────────────

/// Font host and glyph rasterizer over `cosmic-text`.
pub struct CosmicHost {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Default for CosmicHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicHost {
    /// Create a host with an empty font database.
    ///
    /// Only fonts registered through [`FontHost::load_font`] are
    /// available, which keeps icon rendering independent of whatever is
    /// installed on the machine.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new_with_locale_and_db(
                DEFAULT_LOCALE.to_owned(),
                fontdb::Database::new(),
            ),
            swash_cache: SwashCache::new(),
        }
    }

    /// Create a host that also discovers system fonts.
    pub fn with_system_fonts() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Number of faces in the font database.
    pub fn face_count(&self) -> usize {
        self.font_system.db().len()
    }

    /// Whether any face in the database belongs to `family`.
    pub fn has_family(&self, family: &str) -> bool {
        self.font_system
            .db()
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    }
}

// ── Font loading ────────────────────────────────────────────────────

impl FontHost for CosmicHost {
    fn load_font(&mut self, variant: Variant, bytes: Vec<u8>) -> Result<LoadedFace, GlyphError> {
        let db = self.font_system.db_mut();
        let before: HashSet<fontdb::ID> = db.faces().map(|face| face.id).collect();

        // fontdb silently skips data it cannot parse; a load is detected
        // by the appearance of new faces.
        db.load_font_data(bytes);

        let mut added = db.faces().filter(|face| !before.contains(&face.id));
        let face = added.next().ok_or_else(|| GlyphError::FontLoad {
            variant,
            reason: "data contains no usable font face".into(),
        })?;
        let family = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .ok_or_else(|| GlyphError::FontLoad {
                variant,
                reason: "font face has no family name".into(),
            })?;
        let loaded = LoadedFace::new(family, face.weight.0);

        let extra = added.count();
        if extra > 0 {
            log::warn!(
                "{} font data contains {} extra faces; using '{}' {}",
                variant,
                extra,
                loaded.family,
                loaded.weight,
            );
        }

        log::debug!("loaded {} font '{}' ({})", variant, loaded.family, loaded.weight);
        Ok(loaded)
    }
}

// ── Rasterization ───────────────────────────────────────────────────

impl GlyphRasterizer for CosmicHost {
    fn rasterize(&mut self, request: &GlyphRequest<'_>) -> Result<GlyphMask, RenderError> {
        if !self.has_family(request.family) {
            return Err(RenderError::UnknownFamily(request.family.to_owned()));
        }

        let metrics = Metrics::new(request.pixel_size, request.pixel_size);
        let attrs = Attrs::new()
            .family(Family::Name(request.family))
            .weight(Weight(request.weight));
        let mut utf8 = [0u8; 4];
        let text = request.glyph.encode_utf8(&mut utf8);

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);

                let image = match self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                {
                    Some(img) => img,
                    None => continue,
                };

                let (width, height) = (image.placement.width, image.placement.height);
                if width == 0 || height == 0 {
                    continue;
                }

                let coverage = match image.content {
                    SwashContent::Mask => image.data.clone(),
                    SwashContent::Color => image.data.chunks_exact(4).map(|px| px[3]).collect(),
                    SwashContent::SubpixelMask => image
                        .data
                        .chunks_exact(4)
                        .map(|px| px[0].max(px[1]).max(px[2]))
                        .collect(),
                };
                if coverage.len() != width as usize * height as usize {
                    continue;
                }

                return Ok(GlyphMask::new(width, height, coverage));
            }
        }

        Err(RenderError::EmptyGlyph(request.glyph))
    }
}
