//! Theme variable model
//!
//! A variable holds one expression for light mode and optionally a second
//! for dark mode. Expressions stay unevaluated until a lookup resolves
//! them, so a variable can reference another variable that is registered
//! later in the same `configure` call.

use serde::{Deserialize, Serialize};
use tailor_core::Color;

/// Category tag for typed token expressions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Color,
    Spacing,
    Radius,
    Shadow,
    Font,
    Opacity,
}

/// The value side of a theme variable
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarExpression {
    /// A literal color value
    Color(Color),
    /// A generic utility token string, e.g. `"blue-500"`
    Token(String),
    /// A token string constrained to one category
    Typed { kind: TokenKind, value: String },
    /// A raw CSS property/value pair passed through untouched
    Raw { property: String, value: String },
    /// A reference to another variable by any accepted spelling
    Reference(String),
}

impl VarExpression {
    pub fn color(color: Color) -> Self {
        Self::Color(color)
    }

    pub fn token(value: impl Into<String>) -> Self {
        Self::Token(value.into())
    }

    pub fn typed(kind: TokenKind, value: impl Into<String>) -> Self {
        Self::Typed {
            kind,
            value: value.into(),
        }
    }

    pub fn raw(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Raw {
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn reference(target: impl Into<String>) -> Self {
        Self::Reference(target.into())
    }

    /// The referenced variable name, if this expression is a plain reference
    ///
    /// Literals and token strings are leaves of the reference graph.
    pub fn reference_target(&self) -> Option<&str> {
        match self {
            Self::Reference(target) => Some(target),
            _ => None,
        }
    }

    /// Whether this expression is color-typed (literal or typed token)
    pub fn is_color(&self) -> bool {
        matches!(
            self,
            Self::Color(_)
                | Self::Typed {
                    kind: TokenKind::Color,
                    ..
                }
        )
    }
}

/// A named, themeable value with light and optional dark expressions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeVariable {
    pub light: VarExpression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<VarExpression>,
}

impl ThemeVariable {
    /// A variable with the same expression in both modes
    pub fn new(light: VarExpression) -> Self {
        Self { light, dark: None }
    }

    /// A variable with distinct light and dark expressions
    pub fn with_dark(light: VarExpression, dark: VarExpression) -> Self {
        Self {
            light,
            dark: Some(dark),
        }
    }

    /// Convenience constructor for plain light/dark color pairs
    pub fn color_pair(light: Color, dark: Color) -> Self {
        Self::with_dark(VarExpression::Color(light), VarExpression::Color(dark))
    }

    /// The expression active under `dark` mode selection
    pub fn expression_for(&self, dark: bool) -> &VarExpression {
        if dark {
            self.dark.as_ref().unwrap_or(&self.light)
        } else {
            &self.light
        }
    }

    /// Reference targets of both expressions, for graph construction
    pub fn reference_targets(&self) -> impl Iterator<Item = &str> {
        self.light
            .reference_target()
            .into_iter()
            .chain(self.dark.as_ref().and_then(|d| d.reference_target()))
    }
}
