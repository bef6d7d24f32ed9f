//! Owner-supplied split box properties.

use std::fmt;

use serde::{Deserialize, Serialize};
use splitbox_layout::{PaneSize, PaneSizes, PaneSlot, SplitConfig, SplitOrientation};

use crate::style::InlineStyle;

/// Default class-name prefix.
pub const DEFAULT_PREFIX_CLS: &str = "x6";

/// Presentation and sizing props of a split box.
///
/// Deserializes from the option names used by JS hosts
/// (`split`/`orientation`, `primary`, `resizable`, `refresh`, `size`,
/// `defaultSize`, `minSize`, `maxSize`, `step`, `prefixCls`, `style`,
/// `boxStyle`, `primaryBoxStyle`, `secondBoxStyle`, `resizerStyle`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitBoxProps {
    #[serde(flatten)]
    pub config: SplitConfig,
    /// Controlled size of the primary pane.
    pub size: Option<PaneSize>,
    /// Uncontrolled initial size of the primary pane.
    pub default_size: Option<PaneSize>,
    pub prefix_cls: String,
    pub style: InlineStyle,
    pub box_style: InlineStyle,
    pub primary_box_style: InlineStyle,
    pub second_box_style: InlineStyle,
    pub resizer_style: InlineStyle,
}

impl Default for SplitBoxProps {
    fn default() -> Self {
        Self {
            config: SplitConfig::default(),
            size: None,
            default_size: None,
            prefix_cls: DEFAULT_PREFIX_CLS.to_owned(),
            style: InlineStyle::new(),
            box_style: InlineStyle::new(),
            primary_box_style: InlineStyle::new(),
            second_box_style: InlineStyle::new(),
            resizer_style: InlineStyle::new(),
        }
    }
}

impl SplitBoxProps {
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: SplitOrientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_primary(mut self, primary: PaneSlot) -> Self {
        self.config.primary = primary;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<PaneSize>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_default_size(mut self, size: impl Into<PaneSize>) -> Self {
        self.default_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_prefix_cls(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_cls = prefix.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_box_style(mut self, style: InlineStyle) -> Self {
        self.box_style = style;
        self
    }

    #[must_use]
    pub fn with_primary_box_style(mut self, style: InlineStyle) -> Self {
        self.primary_box_style = style;
        self
    }

    #[must_use]
    pub fn with_second_box_style(mut self, style: InlineStyle) -> Self {
        self.second_box_style = style;
        self
    }

    #[must_use]
    pub fn with_resizer_style(mut self, style: InlineStyle) -> Self {
        self.resizer_style = style;
        self
    }

    /// Pane sizes implied by these props.
    #[must_use]
    pub fn initial_sizes(&self) -> PaneSizes {
        PaneSizes::from_initial(
            self.config.primary,
            self.size.clone(),
            self.default_size.clone(),
        )
    }

    /// Whether a change to `next` requires recomputing pane sizes.
    #[must_use]
    pub fn sizes_changed(&self, next: &Self) -> bool {
        self.config.orientation != next.config.orientation
            || self.config.primary != next.config.primary
            || self.size != next.size
            || self.default_size != next.default_size
    }

    /// Parse props from a JSON object.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, SplitPropsError> {
        serde_json::from_str(json).map_err(|err| SplitPropsError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        })
    }
}

/// Errors raised while ingesting props from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPropsError {
    /// The payload is not a valid props object.
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl fmt::Display for SplitPropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                line,
                column,
                message,
            } => write!(
                f,
                "invalid split box props at {line}:{column}: {message}"
            ),
        }
    }
}

impl std::error::Error for SplitPropsError {}
