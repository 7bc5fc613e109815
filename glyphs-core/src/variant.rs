//! Font variants: the three Font Awesome faces a glyph can live in.
//!
//! Every variant has a tag selector (`fab`, `far`, `fas`) used by the
//! rich-text directives, and a bit in [`VariantSet`] used by the glyph
//! table to record which faces carry a glyph.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// ── Variant ─────────────────────────────────────────────────────────

/// One of the three icon font faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Brand,
    Regular,
    Solid,
}

impl Variant {
    /// All variants, in registry order.
    pub const ALL: [Variant; 3] = [Variant::Brand, Variant::Regular, Variant::Solid];

    /// Tag selector used in rich-text directives.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Brand => "fab",
            Self::Regular => "far",
            Self::Solid => "fas",
        }
    }

    /// Parse a rich-text selector. Matching is exact (case-sensitive).
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "fab" => Some(Self::Brand),
            "far" => Some(Self::Regular),
            "fas" => Some(Self::Solid),
            _ => None,
        }
    }

    /// Index into per-variant arrays.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Brand => 0,
            Self::Regular => 1,
            Self::Solid => 2,
        }
    }

    /// The single-bit set for this variant.
    pub const fn as_set(self) -> VariantSet {
        match self {
            Self::Brand => VariantSet::BRANDS,
            Self::Regular => VariantSet::REGULAR,
            Self::Solid => VariantSet::SOLID,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brand => "brands",
            Self::Regular => "regular",
            Self::Solid => "solid",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = String;

    /// Accepts either a selector (`fas`) or a face name (`solid`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(variant) = Self::from_selector(s) {
            return Ok(variant);
        }
        match s.to_ascii_lowercase().as_str() {
            "brand" | "brands" => Ok(Self::Brand),
            "regular" => Ok(Self::Regular),
            "solid" => Ok(Self::Solid),
            _ => Err(format!("unknown variant '{}'", s)),
        }
    }
}

// ── Variant sets ────────────────────────────────────────────────────

bitflags! {
    /// Set of variants whose font carries a glyph.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VariantSet: u8 {
        const BRANDS = 0b001;
        const REGULAR = 0b010;
        const SOLID = 0b100;
    }
}

impl VariantSet {
    /// Whether `variant` is in the set.
    pub fn has(self, variant: Variant) -> bool {
        self.contains(variant.as_set())
    }

    /// The canonical variant of a glyph carried by these faces.
    ///
    /// Solid wins over brands, brands over regular.
    pub fn canonical(self) -> Option<Variant> {
        [Variant::Solid, Variant::Brand, Variant::Regular]
            .into_iter()
            .find(|v| self.has(*v))
    }

    /// Iterate the variants in the set, in registry order.
    pub fn variants(self) -> impl Iterator<Item = Variant> {
        Variant::ALL.into_iter().filter(move |v| self.has(*v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_selector(variant.selector()), Some(variant));
        }
    }

    #[test]
    fn test_selector_is_case_sensitive() {
        assert_eq!(Variant::from_selector("FAS"), None);
        assert_eq!(Variant::from_selector("fa"), None);
        assert_eq!(Variant::from_selector(""), None);
    }

    #[test]
    fn test_from_str_accepts_names_and_selectors() {
        assert_eq!("fab".parse::<Variant>(), Ok(Variant::Brand));
        assert_eq!("Solid".parse::<Variant>(), Ok(Variant::Solid));
        assert_eq!("brands".parse::<Variant>(), Ok(Variant::Brand));
        assert!("light".parse::<Variant>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Variant::Regular.to_string(), "regular");
        assert_eq!(Variant::Brand.to_string(), "brands");
    }

    #[test]
    fn test_canonical_prefers_solid() {
        let set = VariantSet::REGULAR | VariantSet::SOLID;
        assert_eq!(set.canonical(), Some(Variant::Solid));
        assert_eq!(VariantSet::BRANDS.canonical(), Some(Variant::Brand));
        assert_eq!(VariantSet::REGULAR.canonical(), Some(Variant::Regular));
        assert_eq!(VariantSet::empty().canonical(), None);
    }

    #[test]
    fn test_variants_iter() {
        let set = VariantSet::REGULAR | VariantSet::SOLID;
        let variants: Vec<_> = set.variants().collect();
        assert_eq!(variants, vec![Variant::Regular, Variant::Solid]);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Variant::Solid).unwrap();
        assert_eq!(json, "\"solid\"");
        let back: Variant = serde_json::from_str("\"brand\"").unwrap();
        assert_eq!(back, Variant::Brand);
    }
}
