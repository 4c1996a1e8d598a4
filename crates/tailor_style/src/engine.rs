//! Engine façade tying the pipeline together
//!
//! Raw directive string -> alias expansion -> token parsing -> conflict
//! resolution -> dispatch. Each call is independent and idempotent given
//! the same inputs and registry snapshot; the registry handle is passed
//! explicitly rather than read from ambient global state.

use tailor_core::DiagnosticSink;
use tailor_theme::ThemeRegistry;

use crate::context::RenderContext;
use crate::dispatch::{dispatch, EffectApplier};
use crate::resolver::{resolve, Resolution};
use crate::token::parse_tokens;

/// Style resolution engine bound to a registry and diagnostic sink
pub struct StyleEngine<'a> {
    registry: &'a ThemeRegistry,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> StyleEngine<'a> {
    pub fn new(registry: &'a ThemeRegistry, sink: &'a dyn DiagnosticSink) -> Self {
        Self { registry, sink }
    }

    /// Engine over the process-wide default registry
    pub fn with_global_registry(sink: &'a dyn DiagnosticSink) -> Self {
        Self::new(ThemeRegistry::global(), sink)
    }

    pub fn registry(&self) -> &ThemeRegistry {
        self.registry
    }

    /// Resolve a directive string into an application plan
    ///
    /// Aliases expand first, before variant parsing, because an alias's
    /// expansion may itself introduce variant-bearing tokens. A malformed
    /// directive degrades token by token; this never fails.
    pub fn resolve(&self, directive: &str, ctx: &RenderContext) -> Resolution {
        let raw: Vec<&str> = directive.split_ascii_whitespace().collect();
        let expanded = self.registry.expand_aliases(raw);
        let tokens = parse_tokens(expanded.iter().map(|s| s.as_str()));
        let resolution = resolve(tokens, ctx, self.registry, self.sink);
        tracing::trace!(
            directive,
            tokens = resolution.tokens.len(),
            "resolved style directive"
        );
        resolution
    }

    /// Dispatch an existing resolution to an element
    pub fn dispatch<E>(
        &self,
        resolution: &Resolution,
        ctx: &RenderContext,
        element: &mut E,
        appliers: &[&dyn EffectApplier<E>],
    ) {
        dispatch(resolution, ctx, element, appliers, self.sink);
    }

    /// Resolve and dispatch in one step, returning the plan
    pub fn apply<E>(
        &self,
        directive: &str,
        ctx: &RenderContext,
        element: &mut E,
        appliers: &[&dyn EffectApplier<E>],
    ) -> Resolution {
        let resolution = self.resolve(directive, ctx);
        self.dispatch(&resolution, ctx, element, appliers);
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_core::NullSink;

    #[test]
    fn resolution_is_idempotent() {
        let registry = ThemeRegistry::new();
        let engine = StyleEngine::new(&registry, &NullSink);
        let ctx = RenderContext::default();

        let first = engine.resolve("p-4 bg-blue-500 dark:bg-red-500", &ctx);
        let second = engine.resolve("p-4 bg-blue-500 dark:bg-red-500", &ctx);

        let raws = |resolution: &Resolution| {
            resolution
                .tokens
                .iter()
                .map(|r| r.token.raw.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(raws(&first), raws(&second));
        assert_eq!(first.padding, second.padding);
    }

    #[test]
    fn aliases_expand_before_variant_parsing() {
        let registry = ThemeRegistry::new();
        registry
            .configure([], [("card".to_string(), "dark:bg-zinc-900 rounded-lg".to_string())], true)
            .unwrap();
        let engine = StyleEngine::new(&registry, &NullSink);

        let resolution = engine.resolve("card p-4", &RenderContext::default());
        let raws: Vec<&str> = resolution
            .tokens
            .iter()
            .map(|r| r.token.raw.as_str())
            .collect();
        assert!(raws.contains(&"dark:bg-zinc-900"));
        assert!(raws.contains(&"rounded-lg"));
        assert!(raws.contains(&"p-4"));
    }

    #[test]
    fn empty_directive_is_a_noop() {
        let registry = ThemeRegistry::new();
        let engine = StyleEngine::new(&registry, &NullSink);
        let resolution = engine.resolve("", &RenderContext::default());
        assert!(resolution.tokens.is_empty());
        assert!(resolution.padding.is_none());
    }
}
