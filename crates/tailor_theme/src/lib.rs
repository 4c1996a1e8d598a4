//! Tailor Theme System
//!
//! The process-wide store of named, themeable variables consumed by the
//! Tailor style resolution engine.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Variables**: Named entries with light and optional dark expressions
//!   (literal colors, token strings, raw CSS passthrough, or references to
//!   other variables)
//! - **Canonical naming**: `brand-bg`, `--brand-bg`, and `var(--brand-bg)`
//!   all address the same entry
//! - **Validation**: Registration-time unresolved-reference and cycle
//!   detection, strict or permissive
//! - **Lazy seeding**: Built-in defaults materialize on first lookup, so
//!   startup never pays for unused entries
//! - **Aliases**: User-defined names expanding to utility token lists
//!
//! # Quick Start
//!
//! ```rust
//! use tailor_theme::{ColorScheme, ThemeRegistry, ThemeVariable, VarExpression};
//! use tailor_core::Color;
//!
//! let registry = ThemeRegistry::new();
//! registry
//!     .configure(
//!         [(
//!             "--brand-bg".to_string(),
//!             ThemeVariable::new(VarExpression::color(Color::from_hex(0x1E66F5))),
//!         )],
//!         [],
//!         true,
//!     )
//!     .unwrap();
//!
//! let color = registry.resolve_color("var(--brand-bg)", ColorScheme::Light);
//! assert_eq!(color, Some(Color::from_hex(0x1E66F5)));
//! ```
//!
//! # Concurrency
//!
//! One coarse mutex guards the whole table. Operations are short map
//! lookups and bounded recursive walks, so parallel rendering passes
//! contend only briefly. Public operations never re-enter one another
//! while holding the lock.

pub mod alias;
pub mod config;
pub mod defaults;
pub mod error;
pub mod graph;
pub mod normalize;
pub mod palette;
pub mod registry;
pub mod scheme;
pub mod variable;

pub use alias::{AliasTable, MAX_ALIAS_DEPTH};
pub use config::ThemeConfig;
pub use error::ThemeError;
pub use normalize::CanonicalName;
pub use palette::palette_color;
pub use registry::ThemeRegistry;
pub use scheme::{ColorScheme, Platform};
pub use variable::{ThemeVariable, TokenKind, VarExpression};
