//! Variant chain evaluation
//!
//! A token applies only when every variant in its chain is satisfied by
//! the current context: variants AND together, never OR. Any unsatisfied
//! variant short-circuits the whole token to inactive.

use tailor_core::DiagnosticSink;

use crate::context::RenderContext;
use crate::variant::Variant;

/// Whether a variant chain is currently satisfied
pub fn should_apply(
    variants: &[Variant],
    ctx: &RenderContext,
    sink: &dyn DiagnosticSink,
) -> bool {
    variants.iter().all(|variant| is_satisfied(variant, ctx, sink))
}

fn is_satisfied(variant: &Variant, ctx: &RenderContext, sink: &dyn DiagnosticSink) -> bool {
    match variant {
        Variant::Appearance(scheme) => ctx.scheme == *scheme,
        Variant::Interaction(kind) => kind.is_satisfied(&ctx.element),
        Variant::Group(kind) => ctx
            .group
            .as_ref()
            .map(|state| kind.is_satisfied(state))
            .unwrap_or(false),
        Variant::Peer { kind, id } => ctx
            .peer_state(id.as_deref())
            .map(|state| kind.is_satisfied(state))
            .unwrap_or(false),
        Variant::Breakpoint(breakpoint) => ctx.viewport_width >= breakpoint.min_width(),
        Variant::Platform(platform) => ctx.platform == *platform,
        Variant::Unknown(name) => {
            sink.warn(&format!("unsupported variant '{name}'"));
            false
        }
    }
}
