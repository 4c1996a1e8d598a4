//! Typed configuration errors

use thiserror::Error;

/// Blocking and advisory issues surfaced by `ThemeRegistry::configure`
///
/// Only the two reference-graph variants are ever returned (and only in
/// strict mode). `InvalidColorVariableName` is part of the taxonomy but is
/// always downgraded to a warning: non-conforming names still function as
/// plain pass-through variables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("variable '{variable}' references unknown variable '{reference}'")]
    UnresolvedReference { variable: String, reference: String },

    #[error("circular variable reference: {}", path.join(" -> "))]
    CircularReference { path: Vec<String> },

    #[error("color variable '{variable}' does not use the color naming convention")]
    InvalidColorVariableName { variable: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_shows_full_path() {
        let err = ThemeError::CircularReference {
            path: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(err.to_string(), "circular variable reference: a -> b -> a");
    }
}
