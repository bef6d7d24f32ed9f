//! Logging facade.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported.
//! Without it, the same macro names expand to nothing so call sites never
//! need their own `cfg` attributes:
//!
//! ```ignore
//! use splitbox_core::{debug, debug_span};
//!
//! let _span = debug_span!("split_box_render", orientation = "vertical").entered();
//! debug!(size = 240.0, "resize gesture ended");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

/// Stand-in for a `tracing` span when the feature is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    #[must_use]
    pub const fn entered(self) -> Self {
        self
    }
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}
