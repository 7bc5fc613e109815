//! # glyphs-text
//!
//! Rich-text conversion for icon glyph directives.
//!
//! ## Architecture
//!
//! ```text
//! "save [fas save] now"
//!     │
//!     ▼
//! scanner::scan ──► Text("save ") · Tag("[fas save]") · Text(" now")
//!     │
//!     ▼
//! rich::resolve(tag) ──► GlyphRegistry::lookup_in(Solid, "save")
//!     │
//!     ▼
//! "save <span style=\"font-family:'…';font-weight:900\">\u{f0c7}</span> now"
//! ```
//!
//! - **`scanner`**: two-state bracket scanner, no allocation.
//! - **`rich`**: directive resolution and span emission.

pub mod rich;
pub mod scanner;

pub use rich::{rich_text, span, TextFormatter};
pub use scanner::{Segment, Tag, MAX_TAG_LEN};
