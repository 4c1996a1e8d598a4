//! Dispatch loop over a resolved token list
//!
//! Walks the application order produced by the resolver and hands each
//! applicable token to the external effect appliers. Appliers are the
//! out-of-scope collaborators that map a base class onto a concrete
//! visual primitive; the engine only knows "offered, handled or not".

use tailor_core::DiagnosticSink;

use crate::context::RenderContext;
use crate::resolver::{Resolution, ResolvedToken};

/// External per-category effect applier
///
/// Implementations inspect the token (base class, category, pre-resolved
/// color) and mutate the element accordingly, returning `true` when the
/// token was theirs to handle.
pub trait EffectApplier<E>: Send + Sync {
    fn apply(&self, token: &ResolvedToken, ctx: &RenderContext, element: &mut E) -> bool;
}

/// Blanket impl so plain functions can act as appliers in tests and
/// small integrations
impl<E, F> EffectApplier<E> for F
where
    F: Fn(&ResolvedToken, &RenderContext, &mut E) -> bool + Send + Sync,
{
    fn apply(&self, token: &ResolvedToken, ctx: &RenderContext, element: &mut E) -> bool {
        self(token, ctx, element)
    }
}

/// Apply a resolution to an element through the given appliers
///
/// Conflict-group winners are applied once, ahead of the loop; their
/// losing rivals are skipped entirely. Every other token is offered in
/// application order when its variant chain is satisfied. Appliers are
/// tried in registration order and the first match wins; a base class no
/// applier recognizes is diagnosed and ignored, never an error.
pub fn dispatch<E>(
    resolution: &Resolution,
    ctx: &RenderContext,
    element: &mut E,
    appliers: &[&dyn EffectApplier<E>],
    sink: &dyn DiagnosticSink,
) {
    // Pre-resolved winners first
    for position in 0..resolution.tokens.len() {
        if resolution.is_winner(position) {
            offer(&resolution.tokens[position], ctx, element, appliers, sink);
        }
    }

    for (position, token) in resolution.tokens.iter().enumerate() {
        if resolution.in_decided_group(position) {
            // Winner already applied, rivals lost
            continue;
        }
        if resolution.is_merged(position) {
            // Consumed by the padding merge
            continue;
        }
        if !token.active {
            continue;
        }
        offer(token, ctx, element, appliers, sink);
    }
}

fn offer<E>(
    token: &ResolvedToken,
    ctx: &RenderContext,
    element: &mut E,
    appliers: &[&dyn EffectApplier<E>],
    sink: &dyn DiagnosticSink,
) {
    for applier in appliers {
        if applier.apply(token, ctx, element) {
            return;
        }
    }
    sink.warn(&format!("unknown style class '{}'", token.token.raw));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use crate::token::parse_directive;
    use tailor_core::{CollectingSink, NullSink};
    use tailor_theme::ThemeRegistry;

    #[derive(Default)]
    struct FakeElement {
        applied: Vec<String>,
    }

    fn record_all(token: &ResolvedToken, _ctx: &RenderContext, element: &mut FakeElement) -> bool {
        element.applied.push(token.token.raw.clone());
        true
    }

    fn dispatch_str(directive: &str, ctx: &RenderContext) -> FakeElement {
        let registry = ThemeRegistry::new();
        let resolution = resolve(parse_directive(directive), ctx, &registry, &NullSink);
        let mut element = FakeElement::default();
        dispatch(&resolution, ctx, &mut element, &[&record_all], &NullSink);
        element
    }

    #[test]
    fn losing_rivals_are_never_offered() {
        let element = dispatch_str("bg-red-500 bg-blue-500 p-2", &RenderContext::default());
        assert!(element.applied.contains(&"bg-blue-500".to_string()));
        assert!(!element.applied.contains(&"bg-red-500".to_string()));
    }

    #[test]
    fn padding_tokens_are_consumed_by_the_merge() {
        let element = dispatch_str("p-4 p-2 m-2", &RenderContext::default());
        assert!(!element.applied.iter().any(|raw| raw.starts_with("p-")));
        // Margin is not part of the padding merge
        assert!(element.applied.contains(&"m-2".to_string()));
    }

    #[test]
    fn inactive_tokens_are_skipped() {
        let element = dispatch_str("font-bold hover:font-bold", &RenderContext::default());
        assert_eq!(element.applied, vec!["font-bold"]);
    }

    #[test]
    fn unmatched_classes_warn_and_continue() {
        let registry = ThemeRegistry::new();
        let ctx = RenderContext::default();
        let sink = CollectingSink::new();
        let resolution = resolve(parse_directive("frobnicate w-4"), &ctx, &registry, &NullSink);

        let reject_unknown =
            |token: &ResolvedToken, _ctx: &RenderContext, element: &mut FakeElement| {
                if token.token.base == "frobnicate" {
                    return false;
                }
                element.applied.push(token.token.raw.clone());
                true
            };

        let mut element = FakeElement::default();
        dispatch(&resolution, &ctx, &mut element, &[&reject_unknown], &sink);

        assert_eq!(element.applied, vec!["w-4"]);
        assert!(sink.warnings()[0].contains("frobnicate"));
    }

    #[test]
    fn first_matching_applier_wins() {
        let registry = ThemeRegistry::new();
        let ctx = RenderContext::default();
        let resolution = resolve(parse_directive("w-4"), &ctx, &registry, &NullSink);

        let first = |token: &ResolvedToken, _: &RenderContext, element: &mut FakeElement| {
            element.applied.push(format!("first:{}", token.token.raw));
            true
        };
        let second = |token: &ResolvedToken, _: &RenderContext, element: &mut FakeElement| {
            element.applied.push(format!("second:{}", token.token.raw));
            true
        };

        let mut element = FakeElement::default();
        dispatch(&resolution, &ctx, &mut element, &[&first, &second], &NullSink);
        assert_eq!(element.applied, vec!["first:w-4"]);
    }
}
