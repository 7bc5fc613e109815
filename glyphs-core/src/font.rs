//! Font resources and the host font subsystem seam.
//!
//! The registry never parses font files itself. It hands the raw bytes of
//! each variant to a [`FontHost`], which registers them with whatever
//! renders text (a `cosmic-text` font system in `glyphs-render`) and
//! reports the family name and weight the face was registered under.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GlyphError;
use crate::variant::Variant;

// ── Loaded faces ────────────────────────────────────────────────────

/// A font face registered with the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedFace {
    /// Family name the host resolves this face by.
    pub family: String,
    /// Weight (100–900). Regular and solid share a family and differ here.
    pub weight: u16,
}

impl LoadedFace {
    pub fn new(family: impl Into<String>, weight: u16) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }
}

// ── Host seam ───────────────────────────────────────────────────────

/// Host font subsystem.
pub trait FontHost {
    /// Register a font from its raw bytes.
    ///
    /// `variant` is only used for diagnostics.
    fn load_font(&mut self, variant: Variant, bytes: Vec<u8>) -> Result<LoadedFace, GlyphError>;
}

// ── Font resources ──────────────────────────────────────────────────

/// File names of the Font Awesome 5 desktop fonts, per variant.
const FILE_STEMS: [(Variant, &str); 3] = [
    (Variant::Brand, "fa-brands-400"),
    (Variant::Regular, "fa-regular-400"),
    (Variant::Solid, "fa-solid-900"),
];

const EXTENSIONS: [&str; 2] = ["otf", "ttf"];

/// Raw font data for the three variants.
#[derive(Clone, Default)]
pub struct FontResources {
    pub brands: Vec<u8>,
    pub regular: Vec<u8>,
    pub solid: Vec<u8>,
}

impl FontResources {
    pub fn new(brands: Vec<u8>, regular: Vec<u8>, solid: Vec<u8>) -> Self {
        Self {
            brands,
            regular,
            solid,
        }
    }

    /// Read the three fonts from `dir`.
    ///
    /// Looks for `fa-brands-400`, `fa-regular-400` and `fa-solid-900`
    /// with an `.otf` or `.ttf` extension.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, GlyphError> {
        let dir = dir.as_ref();
        let mut resources = Self::default();
        for (variant, stem) in FILE_STEMS {
            let path = find_font_file(dir, stem);
            let bytes = fs::read(&path).map_err(|source| GlyphError::Io {
                path: path.clone(),
                source,
            })?;
            log::debug!("read {} font from {} ({} bytes)", variant, path.display(), bytes.len());
            *resources.get_mut(variant) = bytes;
        }
        Ok(resources)
    }

    pub fn get(&self, variant: Variant) -> &[u8] {
        match variant {
            Variant::Brand => &self.brands,
            Variant::Regular => &self.regular,
            Variant::Solid => &self.solid,
        }
    }

    fn get_mut(&mut self, variant: Variant) -> &mut Vec<u8> {
        match variant {
            Variant::Brand => &mut self.brands,
            Variant::Regular => &mut self.regular,
            Variant::Solid => &mut self.solid,
        }
    }
}

impl std::fmt::Debug for FontResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResources")
            .field("brands", &self.brands.len())
            .field("regular", &self.regular.len())
            .field("solid", &self.solid.len())
            .finish()
    }
}

/// First existing candidate, or the `.otf` path so the error names it.
fn find_font_file(dir: &Path, stem: &str) -> PathBuf {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
        .unwrap_or_else(|| dir.join(format!("{}.{}", stem, EXTENSIONS[0])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_reads_all_variants() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fa-brands-400.otf"), b"brands").unwrap();
        fs::write(dir.path().join("fa-regular-400.ttf"), b"regular").unwrap();
        fs::write(dir.path().join("fa-solid-900.otf"), b"solid").unwrap();

        let resources = FontResources::from_dir(dir.path()).unwrap();
        assert_eq!(resources.get(Variant::Brand), b"brands");
        assert_eq!(resources.get(Variant::Regular), b"regular");
        assert_eq!(resources.get(Variant::Solid), b"solid");
    }

    #[test]
    fn test_from_dir_prefers_otf() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fa-brands-400.otf"), b"otf").unwrap();
        fs::write(dir.path().join("fa-brands-400.ttf"), b"ttf").unwrap();
        fs::write(dir.path().join("fa-regular-400.otf"), b"r").unwrap();
        fs::write(dir.path().join("fa-solid-900.otf"), b"s").unwrap();

        let resources = FontResources::from_dir(dir.path()).unwrap();
        assert_eq!(resources.brands, b"otf");
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fa-brands-400.otf"), b"brands").unwrap();

        let err = FontResources::from_dir(dir.path()).unwrap_err();
        match err {
            GlyphError::Io { path, .. } => {
                assert!(path.ends_with("fa-regular-400.otf"), "unexpected path {:?}", path);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_hides_bytes() {
        let resources = FontResources::new(vec![0; 3], vec![0; 4], vec![0; 5]);
        assert_eq!(
            format!("{:?}", resources),
            "FontResources { brands: 3, regular: 4, solid: 5 }"
        );
    }
}
