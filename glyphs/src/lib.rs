//! # glyphs
//!
//! Font Awesome glyphs by name: rich text with inline icons, and
//! coloured multi-density icon images.
//!
//! ```no_run
//! use glyphs::{Glyphs, IconConfig, Rgba};
//!
//! let mut glyphs = Glyphs::from_dir("assets/fonts", &IconConfig::default())?;
//! let label = glyphs.rich_text("[fas save] Save");
//! let icon = glyphs.icon("star", 16, Rgba::rgb(255, 200, 0))?;
//! # Ok::<(), glyphs::Error>(())
//! ```
//!
//! Build one [`Glyphs`] during application setup. The registry inside it
//! is immutable and can be shared with other formatters via
//! [`Glyphs::registry`].

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

pub use glyphs_core::{
    FontHost, FontResources, GlyphEntry, GlyphError, GlyphRegistry, LoadedFace, Rgba, Variant,
    VariantSet,
};
pub use glyphs_render::{
    CosmicHost, GlyphMask, GlyphRasterizer, GlyphRequest, Icon, IconConfig, IconRenderer, Pixmap,
    RenderError,
};
pub use glyphs_text::{rich_text, TextFormatter};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Registry, rich-text formatter and icon renderer over one font host.
pub struct Glyphs<R = CosmicHost> {
    registry: Arc<GlyphRegistry>,
    formatter: TextFormatter,
    renderer: IconRenderer<R>,
}

impl Glyphs<CosmicHost> {
    /// Register `resources` with a fresh `cosmic-text` host.
    pub fn load(resources: &FontResources, config: &IconConfig) -> Result<Self, Error> {
        Self::with_host(CosmicHost::new(), resources, config)
    }

    /// Read the Font Awesome fonts from `dir`, then [`Glyphs::load`].
    pub fn from_dir(dir: impl AsRef<Path>, config: &IconConfig) -> Result<Self, Error> {
        let resources = FontResources::from_dir(dir)?;
        Self::load(&resources, config)
    }
}

impl<R: FontHost + GlyphRasterizer> Glyphs<R> {
    /// Register `resources` with `host`, which then renders the icons.
    pub fn with_host(
        mut host: R,
        resources: &FontResources,
        config: &IconConfig,
    ) -> Result<Self, Error> {
        let registry = Arc::new(GlyphRegistry::load(&mut host, resources)?);
        let renderer = IconRenderer::new(Arc::clone(&registry), host, config)?;
        Ok(Self {
            formatter: TextFormatter::new(Arc::clone(&registry)),
            registry,
            renderer,
        })
    }
}

impl<R: GlyphRasterizer> Glyphs<R> {
    pub fn registry(&self) -> &Arc<GlyphRegistry> {
        &self.registry
    }

    pub fn formatter(&self) -> &TextFormatter {
        &self.formatter
    }

    pub fn brands_name(&self) -> &str {
        self.registry.brands_name()
    }

    pub fn regular_name(&self) -> &str {
        self.registry.regular_name()
    }

    pub fn solid_name(&self) -> &str {
        self.registry.solid_name()
    }

    /// Replace `[fab|far|fas <glyph>]` directives with styled spans.
    pub fn rich_text(&self, input: &str) -> String {
        self.formatter.rich_text(input)
    }

    /// Render `glyph_name` as an icon of `point_size` logical pixels.
    pub fn icon(
        &mut self,
        glyph_name: &str,
        point_size: u32,
        colour: Rgba,
    ) -> Result<Icon, RenderError> {
        self.renderer.icon(glyph_name, point_size, colour)
    }

    /// Render `glyph_name` from a specific face.
    pub fn icon_in(
        &mut self,
        variant: Variant,
        glyph_name: &str,
        point_size: u32,
        colour: Rgba,
    ) -> Result<Icon, RenderError> {
        self.renderer.icon_in(variant, glyph_name, point_size, colour)
    }
}
