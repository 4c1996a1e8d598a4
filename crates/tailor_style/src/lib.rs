//! Tailor Style Resolution Engine
//!
//! Turns an ordered list of utility-class directives into a canonical,
//! conflict-free application plan:
//!
//! - **Token parsing**: `"dark:hover:bg-blue-500"` decomposes into a
//!   variant chain and a base class
//! - **Alias expansion**: user-defined names expand into token lists,
//!   depth-bounded against cycles
//! - **Variant gating**: appearance, interaction, group/peer, responsive,
//!   and platform variants AND together against a read-only context
//! - **Conflict resolution**: a fixed paint order plus single-winner
//!   selection for mutually-exclusive families, with cascade-like
//!   specificity (`dark:` beats unconditioned, later beats earlier)
//! - **Dispatch**: the ordered plan is offered to external effect
//!   appliers; unknown classes degrade to a warning, never a crash
//!
//! # Example
//!
//! ```rust
//! use tailor_core::NullSink;
//! use tailor_style::{ConflictGroup, RenderContext, StyleEngine};
//! use tailor_theme::{ColorScheme, ThemeRegistry};
//!
//! let registry = ThemeRegistry::new();
//! let engine = StyleEngine::new(&registry, &NullSink);
//! let ctx = RenderContext::new(ColorScheme::Dark);
//!
//! let resolution = engine.resolve("bg-blue-500 dark:bg-red-500", &ctx);
//! let winner = resolution.winner(ConflictGroup::BackgroundColor).unwrap();
//! assert_eq!(winner.token.raw, "dark:bg-red-500");
//! ```
//!
//! Resolution is per-element and CPU-only: no suspension points, no I/O.
//! The theme registry is the only shared state, and it is passed in
//! explicitly.

pub mod category;
pub mod context;
pub mod dispatch;
pub mod engine;
pub mod evaluator;
pub mod resolver;
pub mod token;
pub mod variant;

pub use category::{classify, conflict_group, ConflictGroup, StyleCategory};
pub use context::{RenderContext, DEFAULT_PEER_ID};
pub use dispatch::EffectApplier;
pub use engine::StyleEngine;
pub use evaluator::should_apply;
pub use resolver::{PaddingRect, Resolution, ResolvedToken};
pub use token::{parse_directive, parse_token, StyleToken};
pub use variant::{Breakpoint, InteractionKind, Variant};
