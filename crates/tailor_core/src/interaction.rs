//! Interaction state snapshots
//!
//! A read-only capture of an element's pointer/focus state at resolution
//! time. The same shape is reused for ancestor group state and per-peer
//! state; the engine never mutates it.

/// Pointer/focus state of an element at one point in time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub focused: bool,
    pub pressed: bool,
    pub disabled: bool,
}

impl InteractionState {
    pub const IDLE: InteractionState = InteractionState {
        hovered: false,
        focused: false,
        pressed: false,
        disabled: false,
    };

    pub fn hovered() -> Self {
        Self {
            hovered: true,
            ..Self::IDLE
        }
    }

    pub fn focused() -> Self {
        Self {
            focused: true,
            ..Self::IDLE
        }
    }

    pub fn pressed() -> Self {
        Self {
            // A press implies the pointer is over the element
            hovered: true,
            pressed: true,
            ..Self::IDLE
        }
    }

    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::IDLE
        }
    }
}
