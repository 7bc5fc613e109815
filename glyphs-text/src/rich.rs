//! Rich-text conversion: replaces `[fas star]` style directives with
//! styled spans that draw the glyph from the right font face.
//!
//! Directives that do not resolve (unknown selector, unknown glyph,
//! wrong token count) are copied through unchanged, so a typo in one tag
//! never disturbs the surrounding text.

use std::fmt::Write as _;
use std::sync::Arc;

use glyphs_core::{GlyphEntry, GlyphRegistry, LoadedFace, Variant};

use crate::scanner::{self, Segment, Tag};

// ── Formatter ───────────────────────────────────────────────────────

/// Converts tagged text into rich-text markup over a shared registry.
#[derive(Clone, Debug)]
pub struct TextFormatter {
    registry: Arc<GlyphRegistry>,
}

impl TextFormatter {
    pub fn new(registry: Arc<GlyphRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    /// See [`rich_text`].
    pub fn rich_text(&self, input: &str) -> String {
        rich_text(&self.registry, input)
    }
}

/// Convert `input` into rich text, inlining every resolvable directive.
///
/// Text outside directives is copied verbatim; input without `[` is
/// returned unchanged.
pub fn rich_text(registry: &GlyphRegistry, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    scanner::scan(input, |segment| match segment {
        Segment::Text(text) => out.push_str(text),
        Segment::Tag(tag) => match resolve(registry, &tag) {
            Some(entry) => push_span(&mut out, registry.face(entry.variant), entry.code_point),
            None => out.push_str(tag.raw()),
        },
    });
    out
}

/// Resolve a tag to a glyph, or `None` if it should pass through.
pub fn resolve(registry: &GlyphRegistry, tag: &Tag<'_>) -> Option<GlyphEntry> {
    let Some((selector, name)) = tag.tokens() else {
        log::debug!("rich_text: malformed tag {:?}", tag.raw());
        return None;
    };
    let Some(variant) = Variant::from_selector(selector) else {
        log::debug!("rich_text: unknown selector {:?} in {:?}", selector, tag.raw());
        return None;
    };
    registry
        .lookup_in(variant, name)
        .inspect_err(|e| log::debug!("rich_text: {} in {:?}", e, tag.raw()))
        .ok()
}

// ── Markup ──────────────────────────────────────────────────────────

/// A single styled span drawing `glyph` with `face`.
pub fn span(face: &LoadedFace, glyph: char) -> String {
    let mut out = String::new();
    push_span(&mut out, face, glyph);
    out
}

fn push_span(out: &mut String, face: &LoadedFace, glyph: char) {
    out.push_str("<span style=\"font-family:'");
    escape_family_into(out, &face.family);
    // Writing to a String cannot fail.
    let _ = write!(out, "';font-weight:{}\">{}</span>", face.weight, glyph);
}

/// Escape a family name for a single-quoted CSS string inside a
/// double-quoted HTML attribute.
///
/// Quote, backslash and control characters get CSS hex escapes, which
/// survive HTML entity decoding; markup characters get HTML entities.
fn escape_family_into(out: &mut String, family: &str) {
    for c in family.chars() {
        match c {
            c if c == '\'' || c == '\\' || c.is_control() => {
                let _ = write!(out, "\\{:x} ", c as u32);
            }
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
