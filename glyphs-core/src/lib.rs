//! # glyphs-core
//!
//! Glyph registry for the Font Awesome 5 Free icon fonts. Maps symbolic
//! glyph names (`"star"`, `"github"`) to code points and to the font face
//! (brands, regular, solid) that draws them.
//!
//! ## Architecture
//!
//! ```text
//! data/glyphs.txt ──build.rs──► GLYPH_TABLE (phf)
//!                                     │
//! FontResources ──FontHost──► GlyphRegistry ──► lookup(name) → GlyphEntry
//!                                     └──────► family_name(variant)
//! ```
//!
//! - **`variant`**: `Variant` selectors and `VariantSet` style bits.
//! - **`glyph`**: the compiled-in glyph table.
//! - **`font`**: font resources and the `FontHost` seam.
//! - **`registry`**: the registry itself.
//! - **`color`**: RGBA colour shared with the renderer.

pub mod color;
pub mod error;
pub mod font;
pub mod glyph;
pub mod registry;
pub mod variant;

pub use color::Rgba;
pub use error::GlyphError;
pub use font::{FontHost, FontResources, LoadedFace};
pub use glyph::GlyphEntry;
pub use registry::GlyphRegistry;
pub use variant::{Variant, VariantSet};
