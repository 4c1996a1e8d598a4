//! Specificity scoring, application ordering, and conflict resolution
//!
//! Two jobs, both deterministic:
//!
//! 1. **Application ordering** — sort tokens into a fixed paint order:
//!    ascending by `(category tier, has variants, reversed written index)`.
//!    Within a tier every unconditioned token applies before any
//!    variant-bearing token, so a conditional override always gets the
//!    chance to beat its unconditioned base.
//! 2. **Single-winner resolution** — for mutually-exclusive families
//!    (background color, corner radius, ...) pick exactly one active
//!    candidate by specificity score, ties to the latest written token.
//!
//! Padding is the exception to single-winner: its tokens merge additively
//! into one per-side rectangle before dispatch, last write per side wins.

use std::cmp::Reverse;

use rustc_hash::{FxHashMap, FxHashSet};
use tailor_core::{Color, DiagnosticSink};
use tailor_theme::{ColorScheme, ThemeRegistry};

use crate::category::{classify, conflict_group, ConflictGroup, StyleCategory};
use crate::context::RenderContext;
use crate::evaluator::should_apply;
use crate::token::StyleToken;

/// A parsed token enriched with everything dispatch needs
#[derive(Clone, Debug)]
pub struct ResolvedToken {
    pub token: StyleToken,
    pub category: StyleCategory,
    pub group: Option<ConflictGroup>,
    /// Pre-resolved color for color-bearing tokens (`bg-*`, `text-*`,
    /// `border-<color>`), looked up through the registry
    pub color: Option<Color>,
    /// Whether the variant chain is satisfied in the current context
    pub active: bool,
}

impl ResolvedToken {
    /// Specificity score: 10 per variant plus its kind weight
    pub fn specificity(&self) -> u32 {
        self.token
            .variants
            .iter()
            .map(|variant| 10 + variant.weight())
            .sum()
    }
}

/// Final per-side padding values after the additive merge
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingRect {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl PaddingRect {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn set(&mut self, sides: Sides, value: f32) {
        if sides.top {
            self.top = Some(value);
        }
        if sides.right {
            self.right = Some(value);
        }
        if sides.bottom {
            self.bottom = Some(value);
        }
        if sides.left {
            self.left = Some(value);
        }
    }
}

#[derive(Clone, Copy)]
struct Sides {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
}

/// The deterministic output of one resolution call
#[derive(Debug, Default)]
pub struct Resolution {
    /// Tokens in application order
    pub tokens: Vec<ResolvedToken>,
    /// Winning token position (into `tokens`) per decided conflict group
    winners: FxHashMap<ConflictGroup, usize>,
    /// Merged padding, when any padding token was active
    pub padding: Option<PaddingRect>,
    /// Positions consumed by the padding merge
    merged: FxHashSet<usize>,
}

impl Resolution {
    /// The winning token of a conflict group, if the group was decided
    pub fn winner(&self, group: ConflictGroup) -> Option<&ResolvedToken> {
        self.winners.get(&group).map(|idx| &self.tokens[*idx])
    }

    pub fn is_winner(&self, position: usize) -> bool {
        self.tokens[position]
            .group
            .and_then(|group| self.winners.get(&group))
            .map_or(false, |winner| *winner == position)
    }

    /// Whether the token's group was decided by single-winner resolution
    pub fn in_decided_group(&self, position: usize) -> bool {
        self.tokens[position]
            .group
            .map_or(false, |group| self.winners.contains_key(&group))
    }

    pub fn is_merged(&self, position: usize) -> bool {
        self.merged.contains(&position)
    }
}

/// Resolve parsed tokens against a context and registry
pub fn resolve(
    tokens: Vec<StyleToken>,
    ctx: &RenderContext,
    registry: &ThemeRegistry,
    sink: &dyn DiagnosticSink,
) -> Resolution {
    let mut resolved: Vec<ResolvedToken> = tokens
        .into_iter()
        .map(|token| {
            let category = classify(&token.base);
            let group = conflict_group(category);
            let color = token_color(category, &token.base, ctx.scheme, registry);
            let active = should_apply(&token.variants, ctx, sink);
            ResolvedToken {
                token,
                category,
                group,
                color,
                active,
            }
        })
        .collect();

    warn_on_author_conflicts(&resolved, sink);

    // Application order: tier, then unconditioned before variant-bearing,
    // then reversed written index so later tokens of equal standing win
    resolved.sort_by_key(|r| {
        (
            r.category.priority(),
            r.token.has_variants() as u8,
            Reverse(r.token.index),
        )
    });

    let winners = pick_winners(&resolved);
    let (padding, merged) = merge_padding(&resolved);

    Resolution {
        tokens: resolved,
        winners,
        padding,
        merged,
    }
}

/// Resolve the color a color-bearing token names, through the registry
///
/// The registry chain covers runtime overrides, configured variables,
/// seeded defaults, and finally the well-known palette, so `bg-primary`
/// and `bg-blue-500` both land here.
fn token_color(
    category: StyleCategory,
    base: &str,
    scheme: ColorScheme,
    registry: &ThemeRegistry,
) -> Option<Color> {
    let spec = match category {
        StyleCategory::Background => base.strip_prefix("bg-")?,
        StyleCategory::TextColor => base.strip_prefix("text-")?,
        StyleCategory::BorderColor => base.strip_prefix("border-")?,
        _ => return None,
    };
    registry.resolve_color(spec, scheme)
}

/// Flag same-group token pairs with no distinguishing variant
///
/// Two unconditioned tokens in one mutually-exclusive family is an author
/// error, not a legitimate override; the cascade will still pick the
/// later one, but silently honoring it hides the mistake.
fn warn_on_author_conflicts(tokens: &[ResolvedToken], sink: &dyn DiagnosticSink) {
    for (i, first) in tokens.iter().enumerate() {
        let Some(group) = first.group else { continue };
        for second in tokens.iter().skip(i + 1) {
            if second.group == Some(group) && second.token.variants == first.token.variants {
                sink.warn(&format!(
                    "conflicting classes '{}' and '{}' both set {}; the later one wins",
                    first.token.raw, second.token.raw, group
                ));
            }
        }
    }
}

/// Pick one winner per conflict group among currently-active candidates
fn pick_winners(tokens: &[ResolvedToken]) -> FxHashMap<ConflictGroup, usize> {
    let mut winners: FxHashMap<ConflictGroup, usize> = FxHashMap::default();
    for (position, candidate) in tokens.iter().enumerate() {
        let Some(group) = candidate.group else { continue };
        if !candidate.active {
            continue;
        }
        let better = match winners.get(&group) {
            None => true,
            Some(current) => {
                let current = &tokens[*current];
                let candidate_key = (candidate.specificity(), candidate.token.index);
                let current_key = (current.specificity(), current.token.index);
                candidate_key > current_key
            }
        };
        if better {
            winners.insert(group, position);
        }
    }
    winners
}

/// Additive padding merge: last write per side wins, on the 4px scale
fn merge_padding(tokens: &[ResolvedToken]) -> (Option<PaddingRect>, FxHashSet<usize>) {
    let mut merged = FxHashSet::default();
    let mut contributions: Vec<(&ResolvedToken, Sides, f32)> = Vec::new();

    for (position, resolved) in tokens.iter().enumerate() {
        if resolved.category != StyleCategory::Spacing {
            continue;
        }
        let Some((sides, value)) = padding_sides(&resolved.token.base) else {
            continue;
        };
        merged.insert(position);
        if resolved.active {
            contributions.push((resolved, sides, value));
        }
    }

    // Cascade order for side assignments: every unconditioned token before
    // any variant-bearing one, then written order. Writing in that order
    // with replacement gives both cascade rules at once: a conditional
    // override beats its unconditioned base, and of two equal tokens the
    // later-written one wins. Values replace, never sum.
    contributions.sort_by_key(|(resolved, _, _)| {
        (resolved.token.has_variants() as u8, resolved.token.index)
    });

    let mut rect = PaddingRect::default();
    for (_, sides, value) in contributions {
        rect.set(sides, value);
    }

    if rect.is_empty() {
        (None, merged)
    } else {
        (Some(rect), merged)
    }
}

/// Decompose a padding base class into affected sides and pixel value
fn padding_sides(base: &str) -> Option<(Sides, f32)> {
    let (prefix, raw_value) = base.split_once('-')?;
    let sides = match prefix {
        "p" => Sides {
            top: true,
            right: true,
            bottom: true,
            left: true,
        },
        "px" => Sides {
            top: false,
            right: true,
            bottom: false,
            left: true,
        },
        "py" => Sides {
            top: true,
            right: false,
            bottom: true,
            left: false,
        },
        "pt" => Sides {
            top: true,
            right: false,
            bottom: false,
            left: false,
        },
        "pr" => Sides {
            top: false,
            right: true,
            bottom: false,
            left: false,
        },
        "pb" => Sides {
            top: false,
            right: false,
            bottom: true,
            left: false,
        },
        "pl" => Sides {
            top: false,
            right: false,
            bottom: false,
            left: true,
        },
        _ => return None,
    };
    let steps: f32 = raw_value.parse().ok()?;
    Some((sides, steps * 4.0))
}
