//! Full-viewport overlay shown while a resize gesture is active.
//!
//! The mask sits above every sibling so stray pointer events and text
//! selection cannot reach other content mid-drag. It also carries the resize
//! cursor, which would otherwise flicker as the pointer crosses elements.

use splitbox_core::ResizeCursor;

use crate::host::SplitBoxHost;
use crate::style::InlineStyle;

/// Stacking level of the mask.
pub const MASK_Z_INDEX: &str = "9999";

/// Ownership token for the single mask element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayMask {
    mounted: bool,
}

impl OverlayMask {
    #[must_use]
    pub const fn new() -> Self {
        Self { mounted: false }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Inline style of a freshly mounted mask.
    #[must_use]
    pub fn base_style() -> InlineStyle {
        InlineStyle::new()
            .with("position", "absolute")
            .with("top", "0")
            .with("right", "0")
            .with("bottom", "0")
            .with("left", "0")
            .with("z-index", MASK_Z_INDEX)
    }

    /// Mount the mask. Returns `false` if it is already mounted.
    pub fn mount(&mut self, host: &mut impl SplitBoxHost, cursor: ResizeCursor) -> bool {
        if self.mounted {
            return false;
        }
        host.mount_mask(&Self::base_style().with("cursor", cursor.as_css()));
        self.mounted = true;
        true
    }

    /// Update the cursor of a mounted mask.
    pub fn set_cursor(&self, host: &mut impl SplitBoxHost, cursor: ResizeCursor) {
        if self.mounted {
            host.patch_mask_style(&InlineStyle::new().with("cursor", cursor.as_css()));
        }
    }

    /// Unmount the mask. Returns `false` if nothing was mounted.
    pub fn unmount(&mut self, host: &mut impl SplitBoxHost) -> bool {
        if !self.mounted {
            return false;
        }
        host.unmount_mask();
        self.mounted = false;
        true
    }
}
