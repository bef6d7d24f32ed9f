//! Two-pane split configuration and size bookkeeping.
//!
//! A split box has exactly two panes. One of them is the *primary* pane: it
//! carries an explicit size and is the one a resize gesture changes. The
//! other pane has no size of its own and fills whatever space is left.

use std::fmt;

use serde::{Deserialize, Serialize};
use splitbox_core::geometry::{clamp, finite_or_zero};
use splitbox_core::{Rect, warn};

/// Orientation of the divider between the two panes.
///
/// A `Vertical` split has a vertical divider: panes sit side by side and
/// resizing follows horizontal pointer movement. A `Horizontal` split stacks
/// panes top to bottom and follows vertical movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl SplitOrientation {
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Extent of `rect` along the split axis.
    #[must_use]
    pub fn extent_of(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.width,
            Self::Horizontal => rect.height,
        }
    }

    /// Pick the pointer delta component that moves this divider.
    #[must_use]
    pub const fn axis_delta(self, delta_x: f64, delta_y: f64) -> f64 {
        match self {
            Self::Vertical => delta_x,
            Self::Horizontal => delta_y,
        }
    }

    /// CSS property that sizes a pane along the split axis.
    #[must_use]
    pub const fn size_property(self) -> &'static str {
        match self {
            Self::Vertical => "width",
            Self::Horizontal => "height",
        }
    }

    /// CSS `flex-direction` of the container.
    #[must_use]
    pub const fn flex_direction(self) -> &'static str {
        match self {
            Self::Vertical => "row",
            Self::Horizontal => "column",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for SplitOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical position of a pane inside the split box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneSlot {
    #[default]
    First,
    Second,
}

impl PaneSlot {
    /// The complementary pane.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::First)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

/// Interaction configuration for one split box.
///
/// `min_size` / `max_size` are interpreted against the container extent at
/// gesture start, see [`SplitConfig::resolve_range`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitConfig {
    #[serde(alias = "split")]
    pub orientation: SplitOrientation,
    pub primary: PaneSlot,
    pub resizable: bool,
    /// Commit the final size into the persistent pane sizes when a gesture ends.
    #[serde(rename = "refresh")]
    pub refresh_on_end: bool,
    pub step: Option<f64>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            orientation: SplitOrientation::Vertical,
            primary: PaneSlot::First,
            resizable: true,
            refresh_on_end: false,
            step: None,
            min_size: None,
            max_size: None,
        }
    }
}

impl SplitConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: SplitOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_primary(mut self, primary: PaneSlot) -> Self {
        self.primary = primary;
        self
    }

    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    #[must_use]
    pub fn with_refresh_on_end(mut self, refresh: bool) -> Self {
        self.refresh_on_end = refresh;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: f64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Quantization unit, if usable. Non-finite or non-positive steps are
    /// treated as "no step".
    #[must_use]
    pub fn effective_step(&self) -> Option<f64> {
        self.step.filter(|step| step.is_finite() && *step > 0.0)
    }

    /// Resolve the configured bounds against the container extent.
    ///
    /// - a negative `min_size` becomes `extent + min_size`; absent means `0`;
    /// - a zero, negative or absent `max_size` becomes `extent + max_size`;
    /// - both are then clamped into `[0, extent]`.
    ///
    /// If the result is inverted the range collapses onto `max`.
    #[must_use]
    pub fn resolve_range(&self, extent: f64) -> SizeRange {
        let extent = finite_or_zero(extent).max(0.0);
        let mut min = self.min_size.filter(|v| v.is_finite()).unwrap_or(0.0);
        let mut max = self.max_size.filter(|v| v.is_finite()).unwrap_or(0.0);

        if min < 0.0 {
            min += extent;
        }
        if max <= 0.0 {
            max += extent;
        }

        let min = clamp(min, 0.0, extent);
        let max = clamp(max, 0.0, extent);
        if min > max {
            warn!(min, max, extent, "inverted size range collapsed onto max");
            return SizeRange { min: max, max };
        }
        SizeRange { min, max }
    }
}

/// Resolved, absolute size bounds for the primary pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }

    #[must_use]
    pub fn clamp(&self, size: f64) -> f64 {
        clamp(size, self.min, self.max)
    }

    /// Range reduced to one point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }
}

/// Quantize a pointer delta to `step`.
///
/// Only deltas at least one step long are snapped, and they are truncated
/// toward zero (`23` with step `10` gives `20`, `-23` gives `-20`). Shorter
/// deltas pass through unchanged.
#[must_use]
pub fn quantize_delta(delta: f64, step: Option<f64>) -> f64 {
    match step {
        Some(step) if delta.abs() >= step => (delta / step).trunc() * step,
        _ => delta,
    }
}

/// Size of a pane as supplied by the owner: pixels or any CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaneSize {
    Px(f64),
    Css(String),
}

impl PaneSize {
    /// CSS length for inline styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Css(css) => css.clone(),
        }
    }

    #[must_use]
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(*px),
            Self::Css(_) => None,
        }
    }
}

impl From<f64> for PaneSize {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for PaneSize {
    fn from(css: &str) -> Self {
        Self::Css(css.to_owned())
    }
}

impl From<String> for PaneSize {
    fn from(css: String) -> Self {
        Self::Css(css)
    }
}

/// Persistent sizes of the two panes.
///
/// At most one side is set and it is always the primary side; the other
/// pane is left to flex-fill.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaneSizes {
    first: Option<PaneSize>,
    second: Option<PaneSize>,
}

impl PaneSizes {
    /// Both panes unsized: an equal split decided by host layout.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            first: None,
            second: None,
        }
    }

    /// Assign `size` to the primary pane only.
    #[must_use]
    pub fn for_primary(primary: PaneSlot, size: Option<PaneSize>) -> Self {
        match primary {
            PaneSlot::First => Self {
                first: size,
                second: None,
            },
            PaneSlot::Second => Self {
                first: None,
                second: size,
            },
        }
    }

    /// Derive sizes from owner configuration: an explicit (controlled) size
    /// wins over the default (uncontrolled) size.
    #[must_use]
    pub fn from_initial(
        primary: PaneSlot,
        size: Option<PaneSize>,
        default_size: Option<PaneSize>,
    ) -> Self {
        Self::for_primary(primary, size.or(default_size))
    }

    #[must_use]
    pub fn get(&self, slot: PaneSlot) -> Option<&PaneSize> {
        match slot {
            PaneSlot::First => self.first.as_ref(),
            PaneSlot::Second => self.second.as_ref(),
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<&PaneSize> {
        self.first.as_ref()
    }

    #[must_use]
    pub fn second(&self) -> Option<&PaneSize> {
        self.second.as_ref()
    }

    #[must_use]
    pub fn is_unsized(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}

/// CSS `order` of both panes, captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneOrder {
    pub first: i32,
    pub second: i32,
}

impl PaneOrder {
    #[must_use]
    pub const fn new(first: i32, second: i32) -> Self {
        Self { first, second }
    }

    /// Whether the first pane is laid out after the second one.
    #[must_use]
    pub const fn is_swapped(self) -> bool {
        self.first > self.second
    }
}
