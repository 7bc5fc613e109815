//! # glyphs-render
//!
//! Renders icon font glyphs into coloured RGBA icons.
//!
//! ## Architecture
//!
//! ```text
//! IconRenderer::icon(name, size, colour)
//!     │  GlyphRegistry::lookup(name) → GlyphEntry
//!     ▼
//! for scale in [1, 2]:
//!     GlyphRasterizer::rasterize(family, weight, glyph, size * scale)
//!         │                                   (CosmicHost: cosmic-text + swash)
//!         ▼
//!     GlyphMask ──draw_centered──► Pixmap (size*scale)²
//!     │
//!     ▼
//! Icon { pixmaps: [1x, 2x] }
//! ```
//!
//! - **`cosmic`**: `cosmic-text` font host + rasterizer.
//! - **`raster`**: rasterizer trait and glyph masks.
//! - **`pixmap`**: RGBA pixel buffers.
//! - **`icon`**: the icon renderer.

pub mod cosmic;
pub mod error;
pub mod icon;
pub mod pixmap;
pub mod raster;

pub use cosmic::CosmicHost;
pub use error::RenderError;
pub use icon::{Icon, IconConfig, IconRenderer, MAX_PIXMAP_SIDE};
pub use pixmap::Pixmap;
pub use raster::{GlyphMask, GlyphRasterizer, GlyphRequest};
