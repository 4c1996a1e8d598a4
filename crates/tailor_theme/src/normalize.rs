//! Variable name canonicalization
//!
//! A variable may be addressed three ways: as a bare compact name
//! (`brandBg`, `brand-bg`), as a dashed CSS custom property (`--brand-bg`),
//! or wrapped in a `var(...)` accessor (`var(--brand-bg)`). All three must
//! map onto the same internal key, bit-exactly:
//!
//! 1. strip an optional `var( ... )` wrapper; a wrapped name must carry the
//!    `--` prefix or the whole name is rejected
//! 2. drop the `--` prefix when present
//! 3. convert camelCase segment boundaries to `-`
//! 4. lowercase
//!
//! The registry stores each entry under both the dashless key and the
//! `--`-prefixed key.

/// Both stored spellings of a canonicalized variable name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalName {
    /// Dashless canonical key, e.g. `brand-bg`
    pub key: String,
    /// The `--`-prefixed spelling, e.g. `--brand-bg`
    pub prefixed: String,
}

impl CanonicalName {
    fn from_key(key: String) -> Self {
        let prefixed = format!("--{key}");
        Self { key, prefixed }
    }
}

/// Canonicalize a variable name in any accepted spelling
///
/// Returns `None` when the spelling is invalid: an empty name, or a
/// `var(...)` accessor whose inner name lacks the `--` prefix. Rejection
/// is reported via `tracing` at debug level; callers decide whether it
/// warrants a user-facing diagnostic.
pub fn canonicalize(name: &str) -> Option<CanonicalName> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }

    let inner = match strip_var_wrapper(trimmed) {
        Some(inner) => {
            if !inner.starts_with("--") {
                tracing::debug!(name = trimmed, "var() accessor without -- prefix");
                return None;
            }
            inner
        }
        None => trimmed,
    };

    let bare = inner.strip_prefix("--").unwrap_or(inner);
    if bare.is_empty() {
        return None;
    }

    Some(CanonicalName::from_key(kebab_case(bare)))
}

/// Strip `var( ... )`, tolerating whitespace inside the parentheses
fn strip_var_wrapper(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("var(").or_else(|| name.strip_prefix("VAR("))?;
    Some(rest.strip_suffix(')')?.trim())
}

/// Convert camelCase boundaries to `-` and lowercase the result
///
/// Already-kebab names pass through unchanged; digits do not open a new
/// segment (`color2` stays `color2`).
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}
