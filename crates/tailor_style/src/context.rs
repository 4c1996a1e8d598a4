//! Per-resolution render context
//!
//! A read-only snapshot of everything variant evaluation needs: the
//! appearance mode, the element's own interaction state, state propagated
//! from the nearest group ancestor, a peer-id lookup, the viewport width,
//! and the platform tag. The engine never mutates a context; group and
//! peer state are threaded in explicitly rather than read from ambient
//! framework environment.

use rustc_hash::FxHashMap;
use tailor_core::InteractionState;
use tailor_theme::{ColorScheme, Platform};

/// Peer id used when a peer variant carries no `/id` suffix
pub const DEFAULT_PEER_ID: &str = "default";

/// Snapshot consumed by one resolution call
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub scheme: ColorScheme,
    /// The element's own tracked interaction state
    pub element: InteractionState,
    /// State of the nearest ancestor marked as a group, if any
    pub group: Option<InteractionState>,
    /// Peer-id -> peer state, for `peer-*` variants
    pub peers: FxHashMap<String, InteractionState>,
    /// Current viewport width in logical pixels
    pub viewport_width: f32,
    pub platform: Platform,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            element: InteractionState::IDLE,
            group: None,
            peers: FxHashMap::default(),
            viewport_width: 1024.0,
            platform: Platform::current(),
        }
    }
}

impl RenderContext {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_element_state(mut self, state: InteractionState) -> Self {
        self.element = state;
        self
    }

    pub fn with_group_state(mut self, state: InteractionState) -> Self {
        self.group = Some(state);
        self
    }

    /// Register a peer's state under an explicit id
    pub fn with_peer(mut self, id: impl Into<String>, state: InteractionState) -> Self {
        self.peers.insert(id.into(), state);
        self
    }

    /// Register a peer's state under the default id
    pub fn with_default_peer(self, state: InteractionState) -> Self {
        self.with_peer(DEFAULT_PEER_ID, state)
    }

    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Look up peer state; a missing peer is "unsatisfied", never an error
    pub fn peer_state(&self, id: Option<&str>) -> Option<&InteractionState> {
        self.peers.get(id.unwrap_or(DEFAULT_PEER_ID))
    }
}
