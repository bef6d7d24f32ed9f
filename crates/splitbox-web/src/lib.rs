#![forbid(unsafe_code)]

//! `splitbox-web` adapts the SplitBox resize core to a browser host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) owns the DOM, reports
//!   geometry through [`SplitBoxHost`] and applies the style patches handed
//!   back.
//! - **Deterministic input**: [`DragTracker`] turns raw pointer lifecycle
//!   events into `begin`/`update`/`end` signals with explicit capture
//!   commands.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate does not bind to `wasm-bindgen`. [`HeadlessHost`] stands in
//! for the DOM in tests and replay tooling.

pub mod drag_tracker;
pub mod host;
pub mod mask;
pub mod props;
pub mod split_box;
pub mod style;

pub use drag_tracker::{
    DragCaptureCommand, DragDispatch, DragIgnoredReason, DragLifecyclePhase, DragLogEntry,
    DragLogOutcome, DragSignal, DragTracker, DragTrackerConfig,
};
pub use host::{HeadlessHost, SplitBoxHost};
pub use mask::{MASK_Z_INDEX, OverlayMask};
pub use props::{DEFAULT_PREFIX_CLS, SplitBoxProps, SplitPropsError};
pub use split_box::{NotifyCallback, RenderedElement, SizeCallback, SplitBox, SplitBoxView};
pub use style::{InlineStyle, class_names};

pub use splitbox_core::{PointerButton, PointerPosition, Rect, ResizeCursor};
pub use splitbox_layout::{
    PaneSize, PaneSizes, PaneSlot, ResizeEffect, ResizeTransition, SplitConfig, SplitOrientation,
};
