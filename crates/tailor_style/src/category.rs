//! Base-class categories and conflict groups
//!
//! Every base class is classified exactly once, at resolve time, into a
//! closed category set; dispatch consumes the tags instead of re-deriving
//! categories from string prefixes. The prefix table lives here, at the
//! parse boundary, and nowhere else.

use std::fmt;

/// Attribute family a base class belongs to
///
/// The variants double as layering tiers: [`priority`](Self::priority)
/// fixes the paint order independent of author-written order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Typography,
    TextColor,
    Sizing,
    Position,
    Spacing,
    Background,
    Corner,
    BorderWidth,
    BorderColor,
    Ring,
    Shadow,
    Blur,
    Opacity,
    Other,
}

impl StyleCategory {
    /// Layering tier: lower applies earlier
    pub fn priority(self) -> u8 {
        match self {
            Self::Typography | Self::TextColor => 0,
            Self::Sizing => 1,
            Self::Position => 2,
            Self::Spacing => 3,
            Self::Background => 4,
            Self::Corner => 5,
            Self::BorderWidth | Self::BorderColor | Self::Ring => 6,
            Self::Shadow => 7,
            Self::Blur => 8,
            Self::Opacity => 9,
            Self::Other => 10,
        }
    }
}

/// Mutually-exclusive attribute family: at most one active token wins
///
/// Width and color are separate groups even where the base-class prefix
/// is shared (`border-2` vs `border-red-500`). Padding is absent on
/// purpose: it is resolved by an additive per-side merge, not by a single
/// winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConflictGroup {
    BackgroundColor,
    TextColor,
    CornerRadius,
    BorderWidth,
    BorderColor,
    Shadow,
    Blur,
    Opacity,
}

impl fmt::Display for ConflictGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BackgroundColor => "background-color",
            Self::TextColor => "text-color",
            Self::CornerRadius => "corner-radius",
            Self::BorderWidth => "border-width",
            Self::BorderColor => "border-color",
            Self::Shadow => "shadow",
            Self::Blur => "blur",
            Self::Opacity => "opacity",
        };
        f.write_str(name)
    }
}

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

/// Classify a base class into its category
pub fn classify(base: &str) -> StyleCategory {
    match base {
        "italic" | "not-italic" | "underline" | "line-through" | "no-underline" | "uppercase"
        | "lowercase" | "capitalize" | "normal-case" => return StyleCategory::Typography,
        "absolute" | "relative" | "fixed" | "sticky" | "static" => return StyleCategory::Position,
        "rounded" => return StyleCategory::Corner,
        "border" => return StyleCategory::BorderWidth,
        "ring" => return StyleCategory::Ring,
        "shadow" => return StyleCategory::Shadow,
        "blur" => return StyleCategory::Blur,
        _ => {}
    }

    if let Some(suffix) = base.strip_prefix("text-") {
        return if TEXT_SIZES.contains(&suffix) {
            StyleCategory::Typography
        } else {
            StyleCategory::TextColor
        };
    }
    if let Some(suffix) = base.strip_prefix("border-") {
        return if is_width_suffix(suffix) {
            StyleCategory::BorderWidth
        } else {
            StyleCategory::BorderColor
        };
    }

    if has_prefix(base, &["font-", "tracking-", "leading-"]) {
        return StyleCategory::Typography;
    }
    if has_prefix(
        base,
        &["w-", "h-", "size-", "min-w-", "max-w-", "min-h-", "max-h-"],
    ) {
        return StyleCategory::Sizing;
    }
    if has_prefix(
        base,
        &["top-", "right-", "bottom-", "left-", "inset-", "z-"],
    ) {
        return StyleCategory::Position;
    }
    if has_prefix(
        base,
        &[
            "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "m-", "mx-", "my-", "mt-", "mr-",
            "mb-", "ml-", "gap-", "space-x-", "space-y-",
        ],
    ) {
        return StyleCategory::Spacing;
    }
    if base.starts_with("bg-") {
        return StyleCategory::Background;
    }
    if base.starts_with("rounded-") {
        return StyleCategory::Corner;
    }
    if base.starts_with("ring-") {
        return StyleCategory::Ring;
    }
    if base.starts_with("shadow-") {
        return StyleCategory::Shadow;
    }
    if has_prefix(base, &["blur-", "backdrop-blur"]) {
        return StyleCategory::Blur;
    }
    if base.starts_with("opacity-") {
        return StyleCategory::Opacity;
    }

    StyleCategory::Other
}

/// The mutually-exclusive family a category competes in, if any
///
/// Classification already separates width from color, so the category is
/// enough to place a token in its group.
pub fn conflict_group(category: StyleCategory) -> Option<ConflictGroup> {
    match category {
        StyleCategory::Background => Some(ConflictGroup::BackgroundColor),
        StyleCategory::TextColor => Some(ConflictGroup::TextColor),
        StyleCategory::Corner => Some(ConflictGroup::CornerRadius),
        StyleCategory::BorderWidth => Some(ConflictGroup::BorderWidth),
        StyleCategory::BorderColor => Some(ConflictGroup::BorderColor),
        StyleCategory::Shadow => Some(ConflictGroup::Shadow),
        StyleCategory::Blur => Some(ConflictGroup::Blur),
        StyleCategory::Opacity => Some(ConflictGroup::Opacity),
        _ => None,
    }
}

fn has_prefix(base: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| base.starts_with(prefix))
}

/// Width-shaped `border-` suffixes: bare numbers, sides, side-numbers
fn is_width_suffix(suffix: &str) -> bool {
    if suffix.parse::<f32>().is_ok() {
        return true;
    }
    let (side, rest) = match suffix.split_once('-') {
        Some((side, rest)) => (side, Some(rest)),
        None => (suffix, None),
    };
    matches!(side, "t" | "r" | "b" | "l" | "x" | "y")
        && rest.map_or(true, |rest| rest.parse::<f32>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prefix_splits_size_from_color() {
        assert_eq!(classify("text-lg"), StyleCategory::Typography);
        assert_eq!(classify("text-2xl"), StyleCategory::Typography);
        assert_eq!(classify("text-red-500"), StyleCategory::TextColor);
        assert_eq!(classify("text-primary"), StyleCategory::TextColor);
    }

    #[test]
    fn border_prefix_splits_width_from_color() {
        assert_eq!(classify("border"), StyleCategory::BorderWidth);
        assert_eq!(classify("border-2"), StyleCategory::BorderWidth);
        assert_eq!(classify("border-t-4"), StyleCategory::BorderWidth);
        assert_eq!(classify("border-x"), StyleCategory::BorderWidth);
        assert_eq!(classify("border-red-500"), StyleCategory::BorderColor);
        assert_eq!(classify("border-input"), StyleCategory::BorderColor);
    }

    #[test]
    fn width_and_color_compete_in_separate_groups() {
        let width = conflict_group(classify("border-2"));
        let color = conflict_group(classify("border-red-500"));
        assert_eq!(width, Some(ConflictGroup::BorderWidth));
        assert_eq!(color, Some(ConflictGroup::BorderColor));
        assert_ne!(width, color);
    }

    #[test]
    fn paint_order_tiers_are_monotonic() {
        let order = [
            classify("font-bold"),
            classify("w-4"),
            classify("absolute"),
            classify("p-4"),
            classify("bg-blue-500"),
            classify("rounded-md"),
            classify("border-2"),
            classify("shadow-sm"),
            classify("blur-sm"),
        ];
        for pair in order.windows(2) {
            assert!(
                pair[0].priority() <= pair[1].priority(),
                "{:?} should not outrank {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn padding_has_no_conflict_group() {
        assert_eq!(conflict_group(classify("p-4")), None);
    }

    #[test]
    fn unknown_classes_fall_through_to_other() {
        assert_eq!(classify("frobnicate"), StyleCategory::Other);
        assert_eq!(conflict_group(StyleCategory::Other), None);
    }
}
