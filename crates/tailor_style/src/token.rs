//! Style token parsing
//!
//! Splits a directive string into tokens and decomposes each token into
//! its variant chain and base class. Pure and side-effect-free; nothing
//! here consults the registry or the render context.

use smallvec::SmallVec;

use crate::variant::Variant;

/// One parsed directive token, immutable once built
#[derive(Clone, Debug, PartialEq)]
pub struct StyleToken {
    /// The token exactly as written, for diagnostics
    pub raw: String,
    /// Variant chain, left-to-right as written (order is nesting, not priority)
    pub variants: SmallVec<[Variant; 2]>,
    /// The variant-free tail identifying the attribute family and value
    pub base: String,
    /// Position in the expanded directive, for last-wins tie-breaking
    pub index: usize,
}

impl StyleToken {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Parse one raw token at the given position
pub fn parse_token(raw: &str, index: usize) -> StyleToken {
    let mut segments: Vec<&str> = raw.split(':').collect();
    // The final segment is always the base class; everything before it is
    // a variant. A token without ':' therefore has an empty chain.
    let base = segments.pop().unwrap_or_default().to_string();
    let variants = segments.iter().map(|s| Variant::parse(s)).collect();

    StyleToken {
        raw: raw.to_string(),
        variants,
        base,
        index,
    }
}

/// Parse a whole space-separated directive string
///
/// An empty or all-whitespace directive yields zero tokens; that is a
/// no-op, not an error.
pub fn parse_directive(directive: &str) -> Vec<StyleToken> {
    directive
        .split_ascii_whitespace()
        .enumerate()
        .map(|(index, raw)| parse_token(raw, index))
        .collect()
}

/// Parse an already-expanded token list, preserving positions
pub fn parse_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<StyleToken> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_token(raw, index))
        .collect()
}
