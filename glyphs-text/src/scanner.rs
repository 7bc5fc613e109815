//! Tag scanner: splits input into literal text and `[...]` tags.
//!
//! A single left-to-right pass with two states:
//!
//! ```text
//!            '['                      ']'
//! Outside ─────────► Inside{start} ─────────► emit Text, Tag ─► Outside
//!                      │   ▲  '['
//!                      │   └──── restart at the new bracket
//!                      └── body > MAX_TAG_LEN ─► Outside (kept as text)
//! ```
//!
//! Literal text is never copied while scanning; it accumulates as a
//! pending range that is flushed when a tag closes or input ends. An
//! unmatched `[` therefore stays part of the literal text.

/// Longest tag (in bytes, brackets excluded) still considered a directive.
pub const MAX_TAG_LEN: usize = 128;

// ── Segments ────────────────────────────────────────────────────────

/// One piece of scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text to copy verbatim.
    Text(&'a str),
    /// A bracketed run, brackets included.
    Tag(Tag<'a>),
}

/// A closed `[...]` run with no `[` inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    raw: &'a str,
}

impl<'a> Tag<'a> {
    /// The tag as written, brackets included.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The text between the brackets.
    pub fn body(&self) -> &'a str {
        &self.raw[1..self.raw.len() - 1]
    }

    /// Split the body into `(selector, glyph name)`.
    ///
    /// Splits on the first whitespace run only; everything after it is
    /// the name, further whitespace included. `None` if either side is
    /// empty.
    pub fn tokens(&self) -> Option<(&'a str, &'a str)> {
        let body = self.body();
        let split = body.find(char::is_whitespace)?;
        let (selector, rest) = body.split_at(split);
        let name = rest.trim_start();
        if selector.is_empty() || name.is_empty() {
            return None;
        }
        Some((selector, name))
    }
}

// ── Scanner ─────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum State {
    Outside,
    Inside { start: usize },
}

/// Scan `input`, handing each segment to `emit` in order.
///
/// Concatenating the raw form of every emitted segment reproduces the
/// input exactly.
pub fn scan<'a>(input: &'a str, mut emit: impl FnMut(Segment<'a>)) {
    let mut state = State::Outside;
    // Start of literal text not yet emitted.
    let mut pending = 0;

    // Brackets are ASCII, so byte offsets at them are char boundaries.
    for (i, byte) in input.bytes().enumerate() {
        state = match (state, byte) {
            (_, b'[') => State::Inside { start: i },
            (State::Inside { start }, b']') => {
                if pending < start {
                    emit(Segment::Text(&input[pending..start]));
                }
                emit(Segment::Tag(Tag {
                    raw: &input[start..=i],
                }));
                pending = i + 1;
                State::Outside
            }
            (State::Inside { start }, _) if i - start > MAX_TAG_LEN => State::Outside,
            (state, _) => state,
        };
    }

    if pending < input.len() {
        emit(Segment::Text(&input[pending..]));
    }
}

/// Collect the segments of `input`.
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    scan(input, |segment| out.push(segment));
    out
}
