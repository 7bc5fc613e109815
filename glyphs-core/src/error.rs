use std::path::PathBuf;

use thiserror::Error;

use crate::variant::Variant;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Glyph not found: {0}")]
    NotFound(String),
    #[error("Failed to load {variant} font: {reason}")]
    FontLoad { variant: Variant, reason: String },
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid colour: {0}")]
    InvalidColour(String),
}
