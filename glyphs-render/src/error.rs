use glyphs_core::GlyphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error("Invalid point size: {0}")]
    InvalidPointSize(u32),
    #[error("Invalid icon config: {0}")]
    InvalidConfig(String),
    #[error("Unknown font family: {0}")]
    UnknownFamily(String),
    #[error("Glyph {0:?} produced no bitmap")]
    EmptyGlyph(char),
}

impl RenderError {
    /// Whether this is a lookup miss for an unknown glyph name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Glyph(GlyphError::NotFound(_)))
    }
}
