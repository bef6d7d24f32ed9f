//! Host interface consumed by the split box.
//!
//! The embedding environment (JS) owns the DOM. It reports geometry and
//! applies the style patches the split box hands back. [`HeadlessHost`] is a
//! deterministic in-memory implementation used by tests and replay tooling.

use splitbox_core::Rect;
use splitbox_layout::{PaneSlot, SplitOrientation};

use crate::style::InlineStyle;

/// DOM operations required by [`crate::SplitBox`].
pub trait SplitBoxHost {
    /// Bounding rect of the split container element.
    fn container_rect(&self) -> Rect;

    /// Bounding rect of one pane element.
    fn pane_rect(&self, slot: PaneSlot) -> Rect;

    /// Computed CSS `order` of one pane element.
    fn pane_order(&self, slot: PaneSlot) -> i32;

    /// Merge `patch` into the pane's inline style.
    fn patch_pane_style(&mut self, slot: PaneSlot, patch: &InlineStyle);

    /// Append the overlay mask element to the document body.
    fn mount_mask(&mut self, style: &InlineStyle);

    /// Merge `patch` into the mounted mask's inline style.
    fn patch_mask_style(&mut self, patch: &InlineStyle);

    /// Detach the overlay mask element.
    fn unmount_mask(&mut self);
}

/// In-memory host with a trivial flex model.
///
/// Writing a pixel size to a pane resizes that pane's rect and gives the
/// complementary pane the remaining space, so later measurements observe
/// the change the way a browser layout pass would.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessHost {
    orientation: SplitOrientation,
    container: Rect,
    panes: [Rect; 2],
    orders: [i32; 2],
    pane_styles: [InlineStyle; 2],
    mask: Option<InlineStyle>,
    mask_mounts: u32,
    mask_unmounts: u32,
}

impl HeadlessHost {
    /// Create a host whose container is split evenly along `orientation`.
    #[must_use]
    pub fn new(orientation: SplitOrientation, container: Rect) -> Self {
        let mut host = Self {
            orientation,
            container,
            panes: [Rect::default(); 2],
            orders: [0; 2],
            pane_styles: [InlineStyle::new(), InlineStyle::new()],
            mask: None,
            mask_mounts: 0,
            mask_unmounts: 0,
        };
        let half = orientation.extent_of(container) / 2.0;
        host.layout(PaneSlot::First, half);
        host
    }

    /// Force the primary extent of `slot` (and the complement of the other).
    pub fn set_pane_extent(&mut self, slot: PaneSlot, extent: f64) {
        self.layout(slot, extent);
    }

    /// Set the CSS `order` of a pane.
    pub fn set_pane_order(&mut self, slot: PaneSlot, order: i32) {
        self.orders[index(slot)] = order;
    }

    #[must_use]
    pub fn pane_style(&self, slot: PaneSlot) -> &InlineStyle {
        &self.pane_styles[index(slot)]
    }

    /// Inline style of the mounted mask, if any.
    #[must_use]
    pub fn mask(&self) -> Option<&InlineStyle> {
        self.mask.as_ref()
    }

    #[must_use]
    pub const fn mask_mounts(&self) -> u32 {
        self.mask_mounts
    }

    #[must_use]
    pub const fn mask_unmounts(&self) -> u32 {
        self.mask_unmounts
    }

    fn layout(&mut self, slot: PaneSlot, extent: f64) {
        let total = self.orientation.extent_of(self.container);
        let extent = extent.clamp(0.0, total.max(0.0));
        let rest = (total - extent).max(0.0);
        let (a, b) = match slot {
            PaneSlot::First => (extent, rest),
            PaneSlot::Second => (rest, extent),
        };
        let c = self.container;
        self.panes = match self.orientation {
            SplitOrientation::Vertical => [
                Rect::new(c.x, c.y, a, c.height),
                Rect::new(c.x + a, c.y, b, c.height),
            ],
            SplitOrientation::Horizontal => [
                Rect::new(c.x, c.y, c.width, a),
                Rect::new(c.x, c.y + a, c.width, b),
            ],
        };
    }
}

impl SplitBoxHost for HeadlessHost {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn pane_rect(&self, slot: PaneSlot) -> Rect {
        self.panes[index(slot)]
    }

    fn pane_order(&self, slot: PaneSlot) -> i32 {
        self.orders[index(slot)]
    }

    fn patch_pane_style(&mut self, slot: PaneSlot, patch: &InlineStyle) {
        self.pane_styles[index(slot)].merge(patch);
        let px = patch
            .get(self.orientation.size_property())
            .and_then(|value| value.strip_suffix("px"))
            .and_then(|value| value.parse::<f64>().ok());
        if let Some(px) = px {
            self.layout(slot, px);
        }
    }

    fn mount_mask(&mut self, style: &InlineStyle) {
        self.mask = Some(style.clone());
        self.mask_mounts += 1;
    }

    fn patch_mask_style(&mut self, patch: &InlineStyle) {
        if let Some(mask) = self.mask.as_mut() {
            mask.merge(patch);
        }
    }

    fn unmount_mask(&mut self) {
        if self.mask.take().is_some() {
            self.mask_unmounts += 1;
        }
    }
}

const fn index(slot: PaneSlot) -> usize {
    match slot {
        PaneSlot::First => 0,
        PaneSlot::Second => 1,
    }
}
