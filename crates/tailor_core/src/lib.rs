//! Tailor Core Primitives
//!
//! This crate provides the foundational types shared by the Tailor styling
//! engine:
//!
//! - **Colors**: An f32 RGBA color type with hex/`rgb()`/named-color parsing
//! - **Interaction state**: Per-element hover/focus/press/disabled snapshots
//! - **Diagnostics**: A deduplicating `warn`/`error` sink so per-frame
//!   resolution never spams identical messages
//!
//! # Example
//!
//! ```rust
//! use tailor_core::Color;
//!
//! let blue = Color::from_hex(0x3B82F6);
//! let parsed = Color::parse("#3b82f6").unwrap();
//! assert_eq!(blue, parsed);
//! ```

pub mod color;
pub mod diagnostics;
pub mod interaction;

pub use color::Color;
pub use diagnostics::{CollectingSink, DiagnosticSink, NullSink, TracingSink};
pub use interaction::InteractionState;
