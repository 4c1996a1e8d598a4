//! Variant parsing and specificity weights
//!
//! A variant is a conditional prefix gating whether a token applies:
//! appearance (`dark:`), interaction (`hover:`), group/peer-propagated
//! interaction (`group-hover:`, `peer-hover/email:`), responsive
//! breakpoints (`md:`), and platform tags (`macos:`). Unrecognized
//! variants parse to [`Variant::Unknown`] and fail closed at evaluation.

use tailor_core::InteractionState;
use tailor_theme::{ColorScheme, Platform};

/// Interaction state kinds shared by direct, group, and peer variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Hover,
    Focus,
    Active,
    Disabled,
}

impl InteractionKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "hover" => Some(Self::Hover),
            "focus" => Some(Self::Focus),
            "active" => Some(Self::Active),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Whether `state` satisfies this interaction kind
    pub fn is_satisfied(self, state: &InteractionState) -> bool {
        match self {
            Self::Hover => state.hovered,
            Self::Focus => state.focused,
            Self::Active => state.pressed,
            Self::Disabled => state.disabled,
        }
    }
}

/// Responsive breakpoints with Tailwind-compatible minimum widths
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "2xl" => Some(Self::Xxl),
            _ => None,
        }
    }

    /// Minimum viewport width in logical pixels
    ///
    /// These thresholds must match the web defaults exactly for layout
    /// parity: `sm`=640, `md`=768, `lg`=1024, `xl`=1280, `2xl`=1536.
    pub fn min_width(self) -> f32 {
        match self {
            Self::Sm => 640.0,
            Self::Md => 768.0,
            Self::Lg => 1024.0,
            Self::Xl => 1280.0,
            Self::Xxl => 1536.0,
        }
    }
}

/// One parsed variant segment of a style token
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    /// `dark:` / `light:`
    Appearance(ColorScheme),
    /// The element's own interaction state: `hover:`, `focus:`, ...
    Interaction(InteractionKind),
    /// State propagated down from the nearest `group` ancestor
    Group(InteractionKind),
    /// State of a sibling peer, optionally scoped by id (`peer-hover/email`)
    Peer {
        kind: InteractionKind,
        id: Option<String>,
    },
    /// Responsive minimum-width gate
    Breakpoint(Breakpoint),
    /// Runtime platform gate
    Platform(Platform),
    /// Anything unrecognized; never satisfied
    Unknown(String),
}

impl Variant {
    /// Parse one `:`-separated variant segment
    ///
    /// A `/id` suffix is split off first; only peer variants consume it,
    /// anywhere else it makes the segment unrecognizable.
    pub fn parse(segment: &str) -> Variant {
        let (name, id) = match segment.split_once('/') {
            Some((name, id)) => (name, Some(id)),
            None => (segment, None),
        };

        if let Some(peer_kind) = name.strip_prefix("peer-").and_then(InteractionKind::parse) {
            return Variant::Peer {
                kind: peer_kind,
                id: id.map(str::to_string),
            };
        }

        if id.is_some() {
            return Variant::Unknown(segment.to_string());
        }

        if let Some(group_kind) = name.strip_prefix("group-").and_then(InteractionKind::parse) {
            return Variant::Group(group_kind);
        }

        match name {
            "dark" => return Variant::Appearance(ColorScheme::Dark),
            "light" => return Variant::Appearance(ColorScheme::Light),
            _ => {}
        }
        if let Some(kind) = InteractionKind::parse(name) {
            return Variant::Interaction(kind);
        }
        if let Some(breakpoint) = Breakpoint::parse(name) {
            return Variant::Breakpoint(breakpoint);
        }
        if let Some(platform) = Platform::from_tag(name) {
            return Variant::Platform(platform);
        }

        Variant::Unknown(segment.to_string())
    }

    /// Kind-specific specificity weight
    ///
    /// Large steps keep the kinds strictly ordered regardless of chain
    /// length: `dark` > `light` > element interaction > group/peer >
    /// platform > responsive > unknown.
    pub fn weight(&self) -> u32 {
        match self {
            Variant::Appearance(ColorScheme::Dark) => 10_000,
            Variant::Appearance(ColorScheme::Light) => 9_000,
            Variant::Interaction(_) => 1_500,
            Variant::Group(_) | Variant::Peer { .. } => 1_000,
            Variant::Platform(_) => 500,
            Variant::Breakpoint(_) => 100,
            Variant::Unknown(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_variant_kind() {
        assert_eq!(Variant::parse("dark"), Variant::Appearance(ColorScheme::Dark));
        assert_eq!(
            Variant::parse("hover"),
            Variant::Interaction(InteractionKind::Hover)
        );
        assert_eq!(
            Variant::parse("group-focus"),
            Variant::Group(InteractionKind::Focus)
        );
        assert_eq!(Variant::parse("md"), Variant::Breakpoint(Breakpoint::Md));
        assert_eq!(Variant::parse("macos"), Variant::Platform(Platform::MacOs));
    }

    #[test]
    fn peer_variant_carries_scope_id() {
        assert_eq!(
            Variant::parse("peer-hover/email"),
            Variant::Peer {
                kind: InteractionKind::Hover,
                id: Some("email".to_string()),
            }
        );
        assert_eq!(
            Variant::parse("peer-focus"),
            Variant::Peer {
                kind: InteractionKind::Focus,
                id: None,
            }
        );
    }

    #[test]
    fn unknown_segments_fail_closed() {
        assert_eq!(
            Variant::parse("visited"),
            Variant::Unknown("visited".to_string())
        );
        // A scope id on a non-peer variant is not a recognized spelling
        assert_eq!(
            Variant::parse("hover/email"),
            Variant::Unknown("hover/email".to_string())
        );
    }

    #[test]
    fn breakpoint_thresholds_match_web_defaults() {
        assert_eq!(Breakpoint::Sm.min_width(), 640.0);
        assert_eq!(Breakpoint::Md.min_width(), 768.0);
        assert_eq!(Breakpoint::Lg.min_width(), 1024.0);
        assert_eq!(Breakpoint::Xl.min_width(), 1280.0);
        assert_eq!(Breakpoint::Xxl.min_width(), 1536.0);
    }

    #[test]
    fn dark_outweighs_every_other_kind() {
        let dark = Variant::parse("dark").weight();
        for other in ["light", "hover", "group-hover", "peer-hover", "macos", "2xl"] {
            assert!(dark > Variant::parse(other).weight(), "dark should outrank {other}");
        }
    }
}
