//! Glyph registry: resolves glyph names to code points and font faces.
//!
//! ## Architecture
//!
//! ```text
//! GlyphRegistry
//!   ├── faces: [LoadedFace; 3]        (brands, regular, solid)
//!   └── GLYPH_TABLE (phf, static)     name → (code point, styles)
//! ```
//!
//! Build the registry once during application setup with
//! [`GlyphRegistry::load`] and share it behind an `Arc`. It is never
//! mutated afterwards, so concurrent reads need no locking.

use std::fmt;

use crate::error::GlyphError;
use crate::font::{FontHost, FontResources, LoadedFace};
use crate::glyph::{self, GlyphEntry};
use crate::variant::Variant;

/// Name → glyph mapping plus the three registered font faces.
#[derive(Clone, Debug)]
pub struct GlyphRegistry {
    /// Indexed by [`Variant::index`].
    faces: [LoadedFace; 3],
}

impl GlyphRegistry {
    /// Register the three fonts with `host` and build the registry.
    ///
    /// Any font that fails to load aborts construction; the registry is
    /// unusable without all three faces.
    pub fn load<H: FontHost + ?Sized>(
        host: &mut H,
        resources: &FontResources,
    ) -> Result<Self, GlyphError> {
        let mut load = |variant: Variant| {
            let bytes = resources.get(variant);
            let result = if bytes.is_empty() {
                Err(GlyphError::FontLoad {
                    variant,
                    reason: "font resource is empty".into(),
                })
            } else {
                host.load_font(variant, bytes.to_vec())
            };
            result.inspect_err(|e| log::error!("GlyphRegistry: {}", e))
        };

        let brands = load(Variant::Brand)?;
        let regular = load(Variant::Regular)?;
        let solid = load(Variant::Solid)?;

        Ok(Self::from_faces(brands, regular, solid))
    }

    /// Build from faces the host has already registered.
    pub fn from_faces(brands: LoadedFace, regular: LoadedFace, solid: LoadedFace) -> Self {
        let registry = Self {
            faces: [brands, regular, solid],
        };
        log::info!("{}", registry);
        registry
    }

    /// Look up a glyph by exact name.
    ///
    /// The entry carries the glyph's canonical variant: solid when the
    /// solid font has it, brands otherwise.
    pub fn lookup(&self, name: &str) -> Result<GlyphEntry, GlyphError> {
        glyph::find(name).ok_or_else(|| GlyphError::NotFound(name.to_owned()))
    }

    /// Look up a glyph drawn from a specific face.
    ///
    /// Fails with `NotFound` when the face does not carry the glyph, e.g.
    /// `home` has no regular form and `github` exists only in brands.
    pub fn lookup_in(&self, variant: Variant, name: &str) -> Result<GlyphEntry, GlyphError> {
        glyph::find(name)
            .and_then(|entry| entry.in_variant(variant))
            .ok_or_else(|| GlyphError::NotFound(format!("{} {}", variant.selector(), name)))
    }

    /// Whether `name` is a known glyph.
    pub fn contains(&self, name: &str) -> bool {
        glyph::find(name).is_some()
    }

    /// Number of known glyphs.
    pub fn len(&self) -> usize {
        glyph::count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All known glyphs in their canonical variant (unordered).
    pub fn glyphs(&self) -> impl Iterator<Item = GlyphEntry> {
        glyph::all()
    }

    /// The registered face for a variant.
    pub fn face(&self, variant: Variant) -> &LoadedFace {
        &self.faces[variant.index()]
    }

    /// Family name of a variant's font.
    pub fn family_name(&self, variant: Variant) -> &str {
        &self.face(variant).family
    }

    pub fn brands_name(&self) -> &str {
        self.family_name(Variant::Brand)
    }

    pub fn regular_name(&self) -> &str {
        self.family_name(Variant::Regular)
    }

    pub fn solid_name(&self) -> &str {
        self.family_name(Variant::Solid)
    }
}

impl fmt::Display for GlyphRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GlyphRegistry({} glyphs, brands '{}', regular '{}' {}, solid '{}' {})",
            self.len(),
            self.brands_name(),
            self.regular_name(),
            self.face(Variant::Regular).weight,
            self.solid_name(),
            self.face(Variant::Solid).weight,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host that names each face after the bytes it was given.
    #[derive(Default)]
    struct StubHost {
        loaded: Vec<Variant>,
        reject: Option<Variant>,
    }

    impl FontHost for StubHost {
        fn load_font(&mut self, variant: Variant, bytes: Vec<u8>) -> Result<LoadedFace, GlyphError> {
            if self.reject == Some(variant) {
                return Err(GlyphError::FontLoad {
                    variant,
                    reason: "not a font".into(),
                });
            }
            self.loaded.push(variant);
            let weight = if variant == Variant::Solid { 900 } else { 400 };
            Ok(LoadedFace::new(String::from_utf8(bytes).unwrap(), weight))
        }
    }

    fn resources() -> FontResources {
        FontResources::new(
            b"Font Awesome 5 Brands".to_vec(),
            b"Font Awesome 5 Free".to_vec(),
            b"Font Awesome 5 Free".to_vec(),
        )
    }

    #[test]
    fn test_load_records_family_names() {
        let mut host = StubHost::default();
        let registry = GlyphRegistry::load(&mut host, &resources()).unwrap();

        assert_eq!(host.loaded, Variant::ALL.to_vec());
        assert_eq!(registry.brands_name(), "Font Awesome 5 Brands");
        assert_eq!(registry.regular_name(), "Font Awesome 5 Free");
        assert_eq!(registry.solid_name(), "Font Awesome 5 Free");
        assert_eq!(registry.face(Variant::Solid).weight, 900);
        assert_eq!(registry.face(Variant::Regular).weight, 400);
    }

    #[test]
    fn test_load_failure_is_fatal() {
        let mut host = StubHost {
            reject: Some(Variant::Regular),
            ..Default::default()
        };
        let err = GlyphRegistry::load(&mut host, &resources()).unwrap_err();
        assert!(matches!(
            err,
            GlyphError::FontLoad {
                variant: Variant::Regular,
                ..
            }
        ));
        // Solid is never attempted once regular fails.
        assert_eq!(host.loaded, vec![Variant::Brand]);
    }

    #[test]
    fn test_load_rejects_empty_resource() {
        let mut host = StubHost::default();
        let mut res = resources();
        res.solid.clear();
        let err = GlyphRegistry::load(&mut host, &res).unwrap_err();
        assert!(matches!(
            err,
            GlyphError::FontLoad {
                variant: Variant::Solid,
                ..
            }
        ));
    }

    #[test]
    fn test_lookup() {
        let registry = GlyphRegistry::load(&mut StubHost::default(), &resources()).unwrap();
        let star = registry.lookup("star").unwrap();
        assert_eq!(star.code_point, '\u{f005}');
        assert_eq!(star.variant, Variant::Solid);

        match registry.lookup("not-a-real-glyph") {
            Err(GlyphError::NotFound(name)) => assert_eq!(name, "not-a-real-glyph"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_in() {
        let registry = GlyphRegistry::load(&mut StubHost::default(), &resources()).unwrap();

        let star = registry.lookup_in(Variant::Regular, "star").unwrap();
        assert_eq!(star.variant, Variant::Regular);
        assert_eq!(star.code_point, '\u{f005}');

        assert!(matches!(
            registry.lookup_in(Variant::Regular, "github"),
            Err(GlyphError::NotFound(_))
        ));
        assert!(matches!(
            registry.lookup_in(Variant::Brand, "home"),
            Err(GlyphError::NotFound(_))
        ));
        assert!(registry.lookup_in(Variant::Brand, "github").is_ok());
    }

    #[test]
    fn test_every_glyph_is_resolvable() {
        let registry = GlyphRegistry::load(&mut StubHost::default(), &resources()).unwrap();
        assert!(!registry.is_empty());
        for entry in registry.glyphs() {
            assert!(registry.contains(entry.name));
            assert_eq!(registry.lookup(entry.name).unwrap(), entry);
            for variant in entry.styles.variants() {
                let resolved = registry.lookup_in(variant, entry.name).unwrap();
                assert_eq!(resolved.code_point, entry.code_point);
            }
        }
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GlyphRegistry>();
    }

    #[test]
    fn test_display() {
        let registry = GlyphRegistry::from_faces(
            LoadedFace::new("B", 400),
            LoadedFace::new("F", 400),
            LoadedFace::new("F", 900),
        );
        let text = registry.to_string();
        assert!(text.starts_with("GlyphRegistry("));
        assert!(text.contains("solid 'F' 900"));
    }
}
