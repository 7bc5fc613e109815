//! Compiled-in glyph table.
//!
//! `build.rs` turns `data/glyphs.txt` into a perfect-hash map from glyph
//! name to code point and style bits. Lookups are exact-match and never
//! fall back to a default glyph.

use serde::Serialize;

use crate::variant::{Variant, VariantSet};

/// Table row as emitted by the build script.
struct RawGlyph {
    code_point: char,
    styles: u8,
}

include!(concat!(env!("OUT_DIR"), "/glyph_table.rs"));

/// A resolved glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GlyphEntry {
    /// Glyph name (unique key).
    pub name: &'static str,
    /// Code point inside the variant's font.
    pub code_point: char,
    /// The face this entry renders with.
    pub variant: Variant,
    /// Every face carrying this glyph.
    #[serde(skip)]
    pub styles: VariantSet,
}

impl GlyphEntry {
    fn from_raw(name: &'static str, raw: &RawGlyph) -> Option<Self> {
        let styles = VariantSet::from_bits_truncate(raw.styles);
        Some(Self {
            name,
            code_point: raw.code_point,
            variant: styles.canonical()?,
            styles,
        })
    }

    /// The same glyph drawn from another face, if that face carries it.
    pub fn in_variant(self, variant: Variant) -> Option<Self> {
        self.styles
            .has(variant)
            .then_some(Self { variant, ..self })
    }

    /// The glyph as a one-character string.
    pub fn as_string(&self) -> String {
        self.code_point.to_string()
    }
}

/// Look up a glyph by exact name, in its canonical variant.
pub fn find(name: &str) -> Option<GlyphEntry> {
    let (key, raw) = GLYPH_TABLE.get_entry(name)?;
    GlyphEntry::from_raw(*key, raw)
}

/// Number of glyphs in the table.
pub fn count() -> usize {
    GLYPH_TABLE.len()
}

/// Iterate all glyphs (unordered).
pub fn all() -> impl Iterator<Item = GlyphEntry> {
    GLYPH_TABLE
        .entries()
        .filter_map(|(name, raw)| GlyphEntry::from_raw(*name, raw))
}
