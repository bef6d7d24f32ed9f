//! Deterministic pointer tracker for the split box divider.
//!
//! Bridges browser pointer lifecycle signals into the three resize
//! operations (`begin`, `update`, `end`) while enforcing:
//! - one active pointer at a time,
//! - explicit capture acquire/release commands for JS hosts, and
//! - termination on interruption paths (cancel/blur/visibility/lost-capture),
//!   so a gesture can never outlive the pointer that started it.

use splitbox_core::{PointerButton, PointerPosition, trace};

/// Tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTrackerConfig {
    /// Button required to begin a drag.
    pub activation_button: PointerButton,
    /// If true, pointer leave ends the drag when capture was requested but
    /// never acknowledged.
    pub end_on_leave_without_capture: bool,
}

impl Default for DragTrackerConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
            end_on_leave_without_capture: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Requested,
    Acquired,
}

impl CaptureState {
    const fn is_acquired(self) -> bool {
        matches!(self, Self::Acquired)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    pointer_id: u32,
    button: PointerButton,
    last_position: PointerPosition,
    capture_state: CaptureState,
}

/// Host command for browser pointer-capture control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCaptureCommand {
    Acquire { pointer_id: u32 },
    Release { pointer_id: u32 },
}

/// Resize operation requested by one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    Begin,
    Update { delta_x: f64, delta_y: f64 },
    End,
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragLifecyclePhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    PointerLeave,
    Blur,
    VisibilityHidden,
    LostPointerCapture,
    CaptureAcquired,
}

/// Why an incoming lifecycle signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    InvalidPointerId,
    ButtonNotAllowed,
    ButtonMismatch,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    LeaveWhileCaptured,
    NoMovement,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragLogOutcome {
    SignalEmitted,
    CaptureStateUpdated,
    Ignored(DragIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLogEntry {
    pub phase: DragLifecyclePhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub position: Option<PointerPosition>,
    pub capture_command: Option<DragCaptureCommand>,
    pub outcome: DragLogOutcome,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDispatch {
    pub signal: Option<DragSignal>,
    pub capture_command: Option<DragCaptureCommand>,
    pub log: DragLogEntry,
}

impl DragDispatch {
    fn ignored(
        phase: DragLifecyclePhase,
        reason: DragIgnoredReason,
        pointer_id: Option<u32>,
        position: Option<PointerPosition>,
    ) -> Self {
        trace!(?phase, ?reason, "pointer signal ignored");
        Self {
            signal: None,
            capture_command: None,
            log: DragLogEntry {
                phase,
                sequence: None,
                pointer_id,
                position,
                capture_command: None,
                outcome: DragLogOutcome::Ignored(reason),
            },
        }
    }

    fn capture_state_updated(phase: DragLifecyclePhase, pointer_id: u32) -> Self {
        Self {
            signal: None,
            capture_command: None,
            log: DragLogEntry {
                phase,
                sequence: None,
                pointer_id: Some(pointer_id),
                position: None,
                capture_command: None,
                outcome: DragLogOutcome::CaptureStateUpdated,
            },
        }
    }
}

/// Pointer tracker for one divider.
///
/// Feed it the DOM pointer events of the resizer (plus window-level blur and
/// visibility changes) and forward the returned [`DragSignal`]s to
/// [`crate::SplitBox::apply_signal`]. Capture commands map to
/// `setPointerCapture()` / `releasePointerCapture()`.
#[derive(Debug, Clone)]
pub struct DragTracker {
    config: DragTrackerConfig,
    active: Option<ActiveDrag>,
    next_sequence: u64,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DragTrackerConfig::default())
    }
}

impl DragTracker {
    #[must_use]
    pub const fn new(config: DragTrackerConfig) -> Self {
        Self {
            config,
            active: None,
            next_sequence: 1,
        }
    }

    #[must_use]
    pub const fn config(&self) -> DragTrackerConfig {
        self.config
    }

    /// Active pointer ID, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Handle pointer-down on the divider.
    pub fn pointer_down(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> DragDispatch {
        let phase = DragLifecyclePhase::PointerDown;
        if pointer_id == 0 {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::InvalidPointerId,
                Some(pointer_id),
                Some(position),
            );
        }
        if button != self.config.activation_button {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::ButtonNotAllowed,
                Some(pointer_id),
                Some(position),
            );
        }
        if self.active.is_some() {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::ActivePointerAlreadyInProgress,
                Some(pointer_id),
                Some(position),
            );
        }

        self.active = Some(ActiveDrag {
            pointer_id,
            button,
            last_position: position,
            capture_state: CaptureState::Requested,
        });
        self.emit(
            phase,
            DragSignal::Begin,
            pointer_id,
            Some(position),
            Some(DragCaptureCommand::Acquire { pointer_id }),
        )
    }

    /// Mark browser pointer capture as acquired.
    pub fn capture_acquired(&mut self, pointer_id: u32) -> DragDispatch {
        let phase = DragLifecyclePhase::CaptureAcquired;
        let Some(mut active) = self.active else {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::PointerMismatch,
                Some(pointer_id),
                None,
            );
        }
        active.capture_state = CaptureState::Acquired;
        self.active = Some(active);
        DragDispatch::capture_state_updated(phase, pointer_id)
    }

    /// Handle pointer-move; emits the movement since the previous move.
    pub fn pointer_move(&mut self, pointer_id: u32, position: PointerPosition) -> DragDispatch {
        let phase = DragLifecyclePhase::PointerMove;
        let Some(mut active) = self.active else {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::NoActivePointer,
                Some(pointer_id),
                Some(position),
            );
        };
        if active.pointer_id != pointer_id {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(position),
            );
        }

        let (delta_x, delta_y) = position.delta_from(active.last_position);
        if delta_x == 0.0 && delta_y == 0.0 {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::NoMovement,
                Some(pointer_id),
                Some(position),
            );
        }
        active.last_position = position;
        self.active = Some(active);
        self.emit(
            phase,
            DragSignal::Update { delta_x, delta_y },
            pointer_id,
            Some(position),
            None,
        )
    }

    /// Handle pointer-up and release capture for the active pointer.
    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> DragDispatch {
        let phase = DragLifecyclePhase::PointerUp;
        let Some(active) = self.active else {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::NoActivePointer,
                Some(pointer_id),
                Some(position),
            );
        };
        if active.pointer_id != pointer_id {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(position),
            );
        }
        if active.button != button {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::ButtonMismatch,
                Some(pointer_id),
                Some(position),
            );
        }
        self.finish(phase, Some(position), true)
    }

    /// Handle browser pointer-cancel.
    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> DragDispatch {
        self.interrupt(DragLifecyclePhase::PointerCancel, pointer_id, true)
    }

    /// Handle pointer-leave of the divider.
    pub fn pointer_leave(&mut self, pointer_id: u32) -> DragDispatch {
        let phase = DragLifecyclePhase::PointerLeave;
        let Some(active) = self.active else {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::PointerMismatch,
                Some(pointer_id),
                None,
            );
        }
        if matches!(active.capture_state, CaptureState::Requested)
            && self.config.end_on_leave_without_capture
        {
            self.finish(phase, None, true)
        } else {
            DragDispatch::ignored(
                phase,
                DragIgnoredReason::LeaveWhileCaptured,
                Some(pointer_id),
                None,
            )
        }
    }

    /// Handle window blur.
    pub fn blur(&mut self) -> DragDispatch {
        self.interrupt(DragLifecyclePhase::Blur, None, true)
    }

    /// Handle the document becoming hidden.
    pub fn visibility_hidden(&mut self) -> DragDispatch {
        self.interrupt(DragLifecyclePhase::VisibilityHidden, None, true)
    }

    /// Handle `lostpointercapture`; the browser already released capture.
    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> DragDispatch {
        self.interrupt(
            DragLifecyclePhase::LostPointerCapture,
            Some(pointer_id),
            false,
        )
    }

    fn interrupt(
        &mut self,
        phase: DragLifecyclePhase,
        pointer_id: Option<u32>,
        release_capture: bool,
    ) -> DragDispatch {
        let Some(active) = self.active else {
            return DragDispatch::ignored(
                phase,
                DragIgnoredReason::NoActivePointer,
                pointer_id,
                None,
            );
        };
        if let Some(id) = pointer_id
            && id != active.pointer_id
        {
            return DragDispatch::ignored(phase, DragIgnoredReason::PointerMismatch, Some(id), None);
        }
        self.finish(phase, None, release_capture)
    }

    fn finish(
        &mut self,
        phase: DragLifecyclePhase,
        position: Option<PointerPosition>,
        release_capture: bool,
    ) -> DragDispatch {
        let Some(active) = self.active.take() else {
            return DragDispatch::ignored(phase, DragIgnoredReason::NoActivePointer, None, position);
        };
        let command = (release_capture && active.capture_state.is_acquired()).then_some(
            DragCaptureCommand::Release {
                pointer_id: active.pointer_id,
            },
        );
        self.emit(
            phase,
            DragSignal::End,
            active.pointer_id,
            position,
            command,
        )
    }

    fn emit(
        &mut self,
        phase: DragLifecyclePhase,
        signal: DragSignal,
        pointer_id: u32,
        position: Option<PointerPosition>,
        capture_command: Option<DragCaptureCommand>,
    ) -> DragDispatch {
        let sequence = self.next_sequence();
        DragDispatch {
            signal: Some(signal),
            capture_command,
            log: DragLogEntry {
                phase,
                sequence: Some(sequence),
                pointer_id: Some(pointer_id),
                position,
                capture_command,
                outcome: DragLogOutcome::SignalEmitted,
            },
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}
