//! The split box component.
//!
//! [`SplitBox`] owns the props, the persistent pane sizes, the resize
//! controller and the overlay mask. Resize operations read geometry from
//! and write styles to a [`SplitBoxHost`]; [`SplitBox::render`] produces the
//! element descriptions the host mounts.

use std::fmt;

use serde::Serialize;
use splitbox_core::debug_span;
use splitbox_layout::{
    PaneMeasure, PaneOrder, PaneSize, PaneSizes, PaneSlot, ResizeController, ResizeEffect,
    ResizeTransition,
};

use crate::drag_tracker::{DragDispatch, DragSignal};
use crate::host::SplitBoxHost;
use crate::mask::OverlayMask;
use crate::props::SplitBoxProps;
use crate::style::{InlineStyle, class_names};

/// Callback receiving the primary pane size.
pub type SizeCallback = Box<dyn FnMut(f64)>;

/// Callback without arguments.
pub type NotifyCallback = Box<dyn FnMut()>;

/// Description of one rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedElement {
    pub key: &'static str,
    pub class_name: String,
    pub style: InlineStyle,
}

/// Elements of one render, in document order: `first`, `resizer`, `second`
/// inside `container`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitBoxView {
    pub container: RenderedElement,
    pub first: RenderedElement,
    pub resizer: RenderedElement,
    pub second: RenderedElement,
}

/// Resizable two-pane layout.
pub struct SplitBox {
    props: SplitBoxProps,
    sizes: PaneSizes,
    controller: ResizeController,
    mask: OverlayMask,
    on_resize_start: Option<NotifyCallback>,
    on_resizing: Option<SizeCallback>,
    on_resize_end: Option<SizeCallback>,
    on_resizer_click: Option<NotifyCallback>,
    on_resizer_double_click: Option<NotifyCallback>,
}

impl fmt::Debug for SplitBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitBox")
            .field("props", &self.props)
            .field("sizes", &self.sizes)
            .field("controller", &self.controller)
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}

impl SplitBox {
    #[must_use]
    pub fn new(props: SplitBoxProps) -> Self {
        Self {
            sizes: props.initial_sizes(),
            props,
            controller: ResizeController::new(),
            mask: OverlayMask::new(),
            on_resize_start: None,
            on_resizing: None,
            on_resize_end: None,
            on_resizer_click: None,
            on_resizer_double_click: None,
        }
    }

    #[must_use]
    pub fn on_resize_start(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_resize_start = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_resizing(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_resizing = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_resize_end(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_resize_end = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_resizer_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_resizer_click = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_resizer_double_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_resizer_double_click = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn props(&self) -> &SplitBoxProps {
        &self.props
    }

    /// Persistent pane sizes used by [`SplitBox::render`].
    #[must_use]
    pub fn sizes(&self) -> &PaneSizes {
        &self.sizes
    }

    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.controller.is_active()
    }

    #[must_use]
    pub fn controller(&self) -> &ResizeController {
        &self.controller
    }

    /// Replace the props.
    ///
    /// Pane sizes are recomputed only when a size-relevant prop changed. A
    /// gesture in flight is aborted (mask removed, no callbacks) when the box
    /// stops being resizable or its axis or primary pane changes.
    pub fn set_props(
        &mut self,
        host: &mut impl SplitBoxHost,
        props: SplitBoxProps,
    ) -> Option<ResizeTransition> {
        let current = &self.props.config;
        let next = &props.config;
        let invalidates_gesture = !next.resizable
            || current.orientation != next.orientation
            || current.primary != next.primary;
        let aborted = if invalidates_gesture {
            self.controller.abort()
        } else {
            None
        };
        if aborted.is_some() {
            self.mask.unmount(host);
        }
        if self.props.sizes_changed(&props) {
            self.sizes = props.initial_sizes();
        }
        self.props = props;
        aborted
    }

    /// Start a resize gesture from the current host geometry.
    pub fn begin(&mut self, host: &mut impl SplitBoxHost) -> ResizeTransition {
        let config = &self.props.config;
        let measure = PaneMeasure {
            container: host.container_rect(),
            primary: host.pane_rect(config.primary),
            order: PaneOrder::new(
                host.pane_order(PaneSlot::First),
                host.pane_order(PaneSlot::Second),
            ),
        };
        let transition = self.controller.begin(config, measure);
        if let ResizeEffect::Began { cursor, .. } = transition.effect {
            self.mask.mount(host, cursor);
            if let Some(callback) = self.on_resize_start.as_mut() {
                callback();
            }
        }
        transition
    }

    /// Apply one pointer movement.
    pub fn update(
        &mut self,
        host: &mut impl SplitBoxHost,
        delta_x: f64,
        delta_y: f64,
    ) -> ResizeTransition {
        let transition = self
            .controller
            .update(&self.props.config, delta_x, delta_y);
        if let ResizeEffect::Resized { size, cursor, .. } = transition.effect {
            let config = &self.props.config;
            let patch = InlineStyle::new().with("flex", "none").with(
                config.orientation.size_property(),
                PaneSize::Px(size).to_css(),
            );
            host.patch_pane_style(config.primary, &patch);
            self.mask.set_cursor(host, cursor);
            if let Some(callback) = self.on_resizing.as_mut() {
                callback(size);
            }
        }
        transition
    }

    /// Finish the active gesture.
    pub fn end(&mut self, host: &mut impl SplitBoxHost) -> ResizeTransition {
        let transition = self.controller.end(&self.props.config);
        if let ResizeEffect::Ended { size, commit } = transition.effect {
            if let Some(callback) = self.on_resize_end.as_mut() {
                callback(size);
            }
            if commit {
                self.sizes =
                    PaneSizes::for_primary(self.props.config.primary, Some(PaneSize::Px(size)));
            }
            self.mask.unmount(host);
        }
        transition
    }

    /// Route one drag tracker signal to the matching resize operation.
    pub fn apply_signal(
        &mut self,
        host: &mut impl SplitBoxHost,
        signal: DragSignal,
    ) -> ResizeTransition {
        match signal {
            DragSignal::Begin => self.begin(host),
            DragSignal::Update { delta_x, delta_y } => self.update(host, delta_x, delta_y),
            DragSignal::End => self.end(host),
        }
    }

    /// Apply a drag tracker dispatch. Returns `None` when it carried no signal.
    pub fn handle_drag(
        &mut self,
        host: &mut impl SplitBoxHost,
        dispatch: &DragDispatch,
    ) -> Option<ResizeTransition> {
        dispatch
            .signal
            .map(|signal| self.apply_signal(host, signal))
    }

    /// Divider click pass-through.
    pub fn resizer_click(&mut self) {
        if let Some(callback) = self.on_resizer_click.as_mut() {
            callback();
        }
    }

    /// Divider double-click pass-through.
    pub fn resizer_double_click(&mut self) {
        if let Some(callback) = self.on_resizer_double_click.as_mut() {
            callback();
        }
    }

    /// Describe the container, both panes and the divider.
    #[must_use]
    pub fn render(&self) -> SplitBoxView {
        let config = &self.props.config;
        let _span = debug_span!(
            "split_box_render",
            orientation = config.orientation.as_str(),
            resizing = self.is_resizing()
        )
        .entered();

        let base = format!("{}-split-box", self.props.prefix_cls);
        let orientation_cls = format!("{base}-{}", config.orientation);
        let disabled_cls = format!("{base}-disabled");
        let container = RenderedElement {
            key: "container",
            class_name: class_names([
                (base.as_str(), true),
                (orientation_cls.as_str(), true),
                (disabled_cls.as_str(), !config.resizable),
            ]),
            style: container_style()
                .merged(&self.props.style)
                .with("flex-direction", config.orientation.flex_direction()),
        };

        SplitBoxView {
            container,
            first: self.render_box(&base, PaneSlot::First),
            resizer: RenderedElement {
                key: "resizer",
                class_name: format!("{base}-resizer"),
                style: self.props.resizer_style.clone(),
            },
            second: self.render_box(&base, PaneSlot::Second),
        }
    }

    fn render_box(&self, base: &str, slot: PaneSlot) -> RenderedElement {
        let config = &self.props.config;
        let is_primary = slot == config.primary;
        let role = if is_primary { "primary" } else { "second" };

        let mut style = match self.sizes.get(slot) {
            Some(size) => InlineStyle::new()
                .with("flex", "none")
                .with(config.orientation.size_property(), size.to_css()),
            None => InlineStyle::new().with("flex", "1"),
        };
        style.merge(&self.props.box_style);
        style.merge(if is_primary {
            &self.props.primary_box_style
        } else {
            &self.props.second_box_style
        });

        let item_cls = format!("{base}-item");
        let role_cls = format!("{base}-item-{role}");
        RenderedElement {
            key: slot.as_str(),
            class_name: class_names([(item_cls.as_str(), true), (role_cls.as_str(), true)]),
            style,
        }
    }
}

fn container_style() -> InlineStyle {
    InlineStyle::new()
        .with("flex", "1")
        .with("flex-shrink", "0")
        .with("display", "flex")
        .with("overflow", "hidden")
        .with("position", "relative")
        .with("width", "100%")
        .with("height", "100%")
}
