//! Declarative theme configuration
//!
//! A serde-friendly mirror of the `configure` call, so applications can
//! keep variables and aliases in a TOML or JSON file next to the rest of
//! their configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::variable::ThemeVariable;

/// On-disk theme configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Variable definitions keyed by any accepted name spelling
    #[serde(default)]
    pub variables: BTreeMap<String, ThemeVariable>,

    /// Alias name -> space-joined token list
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Fail configuration on unresolved or circular references
    #[serde(default)]
    pub strict: bool,
}

impl ThemeConfig {
    /// Apply this configuration to a registry
    pub fn apply(self, registry: &ThemeRegistry) -> Result<(), ThemeError> {
        registry.configure(self.variables, self.aliases, self.strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ColorScheme;
    use tailor_core::Color;

    #[test]
    fn toml_config_round_trips_into_a_registry() {
        let toml = r#"
            strict = true

            [variables.brand-bg]
            light = { color = { r = 1.0, g = 1.0, b = 1.0, a = 1.0 } }
            dark = { color = { r = 0.0, g = 0.0, b = 0.0, a = 1.0 } }

            [aliases]
            btn = "px-4 py-2 rounded-md bg-brand-bg"
        "#;

        let config: ThemeConfig = toml::from_str(toml).unwrap();
        let registry = ThemeRegistry::new();
        config.apply(&registry).unwrap();

        assert_eq!(
            registry.resolve_color("brand-bg", ColorScheme::Dark),
            Some(Color::BLACK)
        );
        assert_eq!(
            registry.expand_aliases(["btn"]),
            vec!["px-4", "py-2", "rounded-md", "bg-brand-bg"]
        );
    }
}
