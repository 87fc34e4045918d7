mod visibility;

use serde::{Deserialize, Serialize};

pub use visibility::{
    FocusState, VisibilityChange, VisibilityState, VisibilityStateMachine, VisibilityTransition,
    transition,
};

/// Pointer tracking over the plot overlay.
///
/// `hovered` is the record currently under the pointer; it is cleared on
/// leave, resize and scale-mode change, and set again by the next move.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    inside: bool,
    x: f64,
    y: f64,
    hovered: Option<usize>,
}

impl PointerState {
    #[must_use]
    pub fn inside(self) -> bool {
        self.inside
    }

    #[must_use]
    pub fn position(self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    pub fn on_pointer_enter(&mut self) {
        self.inside = true;
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered: usize) {
        self.inside = true;
        self.x = x;
        self.y = y;
        self.hovered = Some(hovered);
    }

    pub fn on_pointer_leave(&mut self) {
        self.inside = false;
        self.hovered = None;
    }

    /// Drops the hovered record without changing whether the pointer is inside.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }
}
