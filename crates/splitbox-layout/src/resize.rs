//! Pointer-driven resize controller for the primary pane.
//!
//! ```text
//! Idle --begin--> Dragging --update--> Dragging --end--> Idle
//! ```
//!
//! The controller is host-agnostic: callers hand it measurements at
//! [`ResizeController::begin`] and raw pointer deltas at
//! [`ResizeController::update`], and apply the returned
//! [`ResizeEffect`] to their presentation layer. Invalid input never fails;
//! it yields a [`ResizeEffect::Noop`] that names the reason.
//!
//! While dragging, two sizes are tracked. `current_size` is what the pane
//! shows and always lies within the resolved range. `raw_size` accumulates
//! every delta, including the ones that would push the pane past a bound.
//! Once `raw_size` has left the range, further movement only moves
//! `raw_size`; the pane resumes resizing after the pointer has travelled
//! back, so the divider never jumps away from the pointer.

use serde::{Deserialize, Serialize};
use splitbox_core::{Rect, ResizeCursor, debug, trace};

use crate::split::{PaneOrder, PaneSlot, SizeRange, SplitConfig, SplitOrientation, quantize_delta};

/// Host measurements captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneMeasure {
    /// Bounding rect of the split container.
    pub container: Rect,
    /// Bounding rect of the primary pane.
    pub primary: Rect,
    /// CSS `order` of both panes.
    pub order: PaneOrder,
}

/// State of one resize gesture. Lives from `begin` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub range: SizeRange,
    pub current_size: f64,
    pub raw_size: f64,
    pub order_swapped: bool,
}

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResizeState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl ResizeState {
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}

/// Why a controller call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeNoopReason {
    NotResizable,
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    ZeroDelta,
    NonFiniteDelta,
}

/// Presentation effect of one controller call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ResizeEffect {
    /// A gesture started: show the mask with `cursor`.
    Began {
        range: SizeRange,
        size: f64,
        cursor: ResizeCursor,
    },
    /// The primary pane takes `size`; refresh the cursor.
    Resized {
        size: f64,
        raw_size: f64,
        cursor: ResizeCursor,
    },
    /// Pointer moved while beyond a bound; nothing visible changes.
    Tracked { raw_size: f64 },
    /// The gesture ended at `size`: drop the mask.
    Ended { size: f64, commit: bool },
    /// Gesture torn down without callbacks (configuration change).
    Aborted { size: f64 },
    Noop { reason: ResizeNoopReason },
}

/// One controller step with diagnostic fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeTransition {
    pub transition_id: u64,
    pub from: ResizeState,
    pub to: ResizeState,
    pub effect: ResizeEffect,
}

/// Resize interaction state machine for one split box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeController {
    state: ResizeState,
    transition_counter: u64,
}

impl ResizeController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ResizeState {
        self.state
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, ResizeState::Dragging(_))
    }

    /// Active gesture, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    /// Start a gesture.
    ///
    /// Ignored when the box is not resizable or a gesture is already active,
    /// so a second `begin` can never stack a second mask.
    pub fn begin(&mut self, config: &SplitConfig, measure: PaneMeasure) -> ResizeTransition {
        if !config.resizable {
            return self.noop(ResizeNoopReason::NotResizable);
        }
        if self.is_active() {
            return self.noop(ResizeNoopReason::ActiveDragAlreadyInProgress);
        }

        let extent = config.orientation.extent_of(measure.container);
        let range = config.resolve_range(extent);
        let size = config.orientation.extent_of(measure.primary);
        let session = DragSession {
            range,
            current_size: size,
            raw_size: size,
            order_swapped: measure.order.is_swapped(),
        };
        let cursor = resize_cursor(size, range, config.orientation, config.primary);
        debug!(
            orientation = config.orientation.as_str(),
            primary = config.primary.as_str(),
            size,
            min = range.min,
            max = range.max,
            "resize gesture started"
        );
        self.transition(
            ResizeState::Dragging(session),
            ResizeEffect::Began {
                range,
                size,
                cursor,
            },
        )
    }

    /// Apply one pointer movement.
    pub fn update(
        &mut self,
        config: &SplitConfig,
        delta_x: f64,
        delta_y: f64,
    ) -> ResizeTransition {
        if !config.resizable {
            return self.noop(ResizeNoopReason::NotResizable);
        }
        let ResizeState::Dragging(mut session) = self.state else {
            return self.noop(ResizeNoopReason::IdleWithoutActiveDrag);
        };

        let delta = config.orientation.axis_delta(delta_x, delta_y);
        if !delta.is_finite() {
            return self.noop(ResizeNoopReason::NonFiniteDelta);
        }
        if delta == 0.0 {
            return self.noop(ResizeNoopReason::ZeroDelta);
        }
        let delta = directed_delta(
            quantize_delta(delta, config.effective_step()),
            config.primary,
            session.order_swapped,
        );

        if !session.range.contains(session.raw_size) {
            session.raw_size -= delta;
            trace!(raw_size = session.raw_size, "pointer beyond size bound");
            return self.transition(
                ResizeState::Dragging(session),
                ResizeEffect::Tracked {
                    raw_size: session.raw_size,
                },
            );
        }

        session.raw_size -= delta;
        session.current_size = session.range.clamp(session.raw_size);
        let cursor = resize_cursor(
            session.current_size,
            session.range,
            config.orientation,
            config.primary,
        );
        self.transition(
            ResizeState::Dragging(session),
            ResizeEffect::Resized {
                size: session.current_size,
                raw_size: session.raw_size,
                cursor,
            },
        )
    }

    /// Finish the active gesture.
    pub fn end(&mut self, config: &SplitConfig) -> ResizeTransition {
        if !config.resizable {
            return self.noop(ResizeNoopReason::NotResizable);
        }
        let ResizeState::Dragging(session) = self.state else {
            return self.noop(ResizeNoopReason::IdleWithoutActiveDrag);
        };
        debug!(
            size = session.current_size,
            commit = config.refresh_on_end,
            "resize gesture ended"
        );
        self.transition(
            ResizeState::Idle,
            ResizeEffect::Ended {
                size: session.current_size,
                commit: config.refresh_on_end,
            },
        )
    }

    /// Unconditionally return to `Idle`.
    ///
    /// Used when the owner reconfigures the box mid-gesture (for example
    /// turning `resizable` off, which would otherwise make `end` a no-op
    /// and strand the mask). Returns `None` when already idle.
    pub fn abort(&mut self) -> Option<ResizeTransition> {
        let ResizeState::Dragging(session) = self.state else {
            return None;
        };
        debug!(size = session.current_size, "resize gesture aborted");
        Some(self.transition(
            ResizeState::Idle,
            ResizeEffect::Aborted {
                size: session.current_size,
            },
        ))
    }

    fn noop(&mut self, reason: ResizeNoopReason) -> ResizeTransition {
        trace!(?reason, "resize input ignored");
        self.transition(self.state, ResizeEffect::Noop { reason })
    }

    fn transition(&mut self, to: ResizeState, effect: ResizeEffect) -> ResizeTransition {
        let from = self.state;
        self.state = to;
        self.transition_counter = self.transition_counter.saturating_add(1);
        ResizeTransition {
            transition_id: self.transition_counter,
            from,
            to,
            effect,
        }
    }
}

/// Orient a quantized delta so that subtracting it from the primary size
/// follows the pointer.
///
/// Pointer deltas grow toward the right/bottom. The primary pane grows with
/// positive movement when it is laid out first, hence the flip; a swapped
/// visual order flips once more.
#[must_use]
pub fn directed_delta(delta: f64, primary: PaneSlot, order_swapped: bool) -> f64 {
    let delta = if primary.is_first() { -delta } else { delta };
    if order_swapped { -delta } else { delta }
}

/// Cursor for `size` within `range`.
///
/// At a bound the cursor points toward the remaining growth direction of
/// the divider; in between it is the plain column/row resize cursor. The
/// minimum is tested first, so a single-point range reports the minimum.
#[must_use]
pub fn resize_cursor(
    size: f64,
    range: SizeRange,
    orientation: SplitOrientation,
    primary: PaneSlot,
) -> ResizeCursor {
    let first = primary.is_first();
    match orientation {
        SplitOrientation::Vertical => {
            if size == range.min {
                if first {
                    ResizeCursor::EResize
                } else {
                    ResizeCursor::WResize
                }
            } else if size == range.max {
                if first {
                    ResizeCursor::WResize
                } else {
                    ResizeCursor::EResize
                }
            } else {
                ResizeCursor::ColResize
            }
        }
        SplitOrientation::Horizontal => {
            if size == range.min {
                if first {
                    ResizeCursor::SResize
                } else {
                    ResizeCursor::NResize
                }
            } else if size == range.max {
                if first {
                    ResizeCursor::NResize
                } else {
                    ResizeCursor::SResize
                }
            } else {
                ResizeCursor::RowResize
            }
        }
    }
}
