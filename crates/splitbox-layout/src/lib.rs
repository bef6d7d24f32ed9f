#![forbid(unsafe_code)]

//! Split configuration and the resize interaction controller.
//!
//! # Role in SplitBox
//! `splitbox-layout` is the interaction core. [`SplitConfig`] describes a
//! two-pane split, [`PaneSizes`] holds the persistent size of the primary
//! pane, and [`ResizeController`] turns a pointer gesture into clamped pane
//! sizes and cursor feedback. It performs no I/O; `splitbox-web` applies the
//! resulting [`ResizeEffect`]s to a browser host.

pub mod resize;
pub mod split;

pub use resize::{
    DragSession, PaneMeasure, ResizeController, ResizeEffect, ResizeNoopReason, ResizeState,
    ResizeTransition, directed_delta, resize_cursor,
};
pub use split::{
    PaneOrder, PaneSize, PaneSizes, PaneSlot, SizeRange, SplitConfig, SplitOrientation,
    quantize_delta,
};
pub use splitbox_core::{Rect, ResizeCursor};
