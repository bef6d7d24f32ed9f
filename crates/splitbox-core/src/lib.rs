#![forbid(unsafe_code)]

//! Core: geometry, pointer primitives, resize cursors and logging shims.
//!
//! # Role in SplitBox
//! `splitbox-core` holds the host-agnostic vocabulary shared by the resize
//! controller (`splitbox-layout`) and the browser host adapter
//! (`splitbox-web`). Nothing here touches the DOM; hosts report geometry and
//! pointer positions in CSS pixels and the upper crates decide what to do.

pub mod cursor;
pub mod geometry;
pub mod logging;
pub mod pointer;

pub use cursor::ResizeCursor;
pub use geometry::{Rect, clamp};
pub use pointer::{PointerButton, PointerPosition};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
