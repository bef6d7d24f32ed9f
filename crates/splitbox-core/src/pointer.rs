//! Pointer primitives shared by host adapters.

use serde::{Deserialize, Serialize};

/// Pointer button reported with pointer-down/up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub const fn from_dom_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Client-space pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Movement from `previous` to `self`.
    #[must_use]
    pub fn delta_from(self, previous: Self) -> (f64, f64) {
        (self.x - previous.x, self.y - previous.y)
    }
}
