//! Lazily-seeded default variables
//!
//! A compact built-in table of semantic variables in light/dark pairs.
//! Nothing here enters the live registry table at startup; an entry
//! materializes only when a lookup first misses on its name. `configure`
//! validation treats these names as resolvable reference targets without
//! materializing them.

use tailor_core::Color;

use crate::variable::{ThemeVariable, VarExpression};

/// Names the seed table can materialize, for reference validation
pub const SEED_NAMES: &[&str] = &[
    "background",
    "foreground",
    "surface",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
];

/// Whether `key` (dashless canonical form) names a seedable default
pub fn is_seed_name(key: &str) -> bool {
    SEED_NAMES.contains(&key)
}

/// Build the default variable for `key`, if one exists
///
/// Values follow the neutral preset: zinc-scale surfaces with a near-black
/// primary in light mode and the inverse in dark mode.
pub fn seed(key: &str) -> Option<ThemeVariable> {
    let pair = |light: u32, dark: u32| {
        Some(ThemeVariable::color_pair(
            Color::from_hex(light),
            Color::from_hex(dark),
        ))
    };

    match key {
        "background" => pair(0xFFFFFF, 0x09090B),
        "foreground" => pair(0x09090B, 0xFAFAFA),
        "surface" => pair(0xFFFFFF, 0x18181B),
        "primary" => pair(0x18181B, 0xFAFAFA),
        "primary-foreground" => pair(0xFAFAFA, 0x18181B),
        "secondary" => pair(0xF4F4F5, 0x27272A),
        "secondary-foreground" => pair(0x18181B, 0xFAFAFA),
        "muted" => pair(0xF4F4F5, 0x27272A),
        "muted-foreground" => pair(0x71717A, 0xA1A1AA),
        "accent" => pair(0xF4F4F5, 0x27272A),
        "accent-foreground" => pair(0x18181B, 0xFAFAFA),
        "destructive" => pair(0xEF4444, 0x7F1D1D),
        "destructive-foreground" => pair(0xFAFAFA, 0xFAFAFA),
        "border" => pair(0xE4E4E7, 0x27272A),
        "input" => pair(0xE4E4E7, 0x27272A),
        "ring" => Some(ThemeVariable::new(VarExpression::reference("--primary"))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_seeds() {
        for name in SEED_NAMES {
            assert!(seed(name).is_some(), "seed table missing '{name}'");
        }
    }

    #[test]
    fn unknown_names_do_not_seed() {
        assert!(seed("brand-bg").is_none());
        assert!(!is_seed_name("brand-bg"));
    }

    #[test]
    fn seeds_differ_between_modes() {
        let background = seed("background").unwrap();
        assert_ne!(Some(&background.light), background.dark.as_ref());
    }
}
