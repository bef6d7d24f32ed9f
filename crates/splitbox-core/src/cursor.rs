//! Resize cursor affordances.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS cursor shown over the drag mask while resizing.
///
/// The edge variants (`e`, `w`, `n`, `s`) point toward the only direction
/// the pane can still move once it sits on a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeCursor {
    ColResize,
    RowResize,
    EResize,
    WResize,
    NResize,
    SResize,
}

impl ResizeCursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
            Self::EResize => "e-resize",
            Self::WResize => "w-resize",
            Self::NResize => "n-resize",
            Self::SResize => "s-resize",
        }
    }

    /// Whether this cursor signals that one bound has been reached.
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Self::ColResize | Self::RowResize)
    }
}

impl fmt::Display for ResizeCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
