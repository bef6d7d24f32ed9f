//! End-to-end gestures: pointer events through `DragTracker` into a
//! `SplitBox` mounted on a `HeadlessHost`.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use splitbox_web::{
    DragCaptureCommand, DragSignal, DragTracker, HeadlessHost, InlineStyle, PaneSize, PaneSlot,
    PointerButton, PointerPosition, Rect, RenderedElement, ResizeEffect, SplitBox, SplitBoxHost,
    SplitBoxProps, SplitBoxView, SplitConfig, SplitOrientation,
};

const POINTER: u32 = 1;

fn at(x: f64, y: f64) -> PointerPosition {
    PointerPosition::new(x, y)
}

fn host(orientation: SplitOrientation) -> HeadlessHost {
    HeadlessHost::new(orientation, Rect::from_size(600.0, 400.0))
}

#[derive(Debug, Default, PartialEq)]
struct Calls {
    started: u32,
    resizing: Vec<f64>,
    ended: Vec<f64>,
}

fn recording(props: SplitBoxProps) -> (SplitBox, Rc<RefCell<Calls>>) {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let (start, resizing, end) = (Rc::clone(&calls), Rc::clone(&calls), Rc::clone(&calls));
    let split = SplitBox::new(props)
        .on_resize_start(move || start.borrow_mut().started += 1)
        .on_resizing(move |size| resizing.borrow_mut().resizing.push(size))
        .on_resize_end(move |size| end.borrow_mut().ended.push(size));
    (split, calls)
}

#[test]
fn pointer_drag_resizes_primary_pane() {
    let mut host = host(SplitOrientation::Vertical);
    let (mut split, calls) = recording(SplitBoxProps::default());
    let mut tracker = DragTracker::default();

    let down = tracker.pointer_down(POINTER, PointerButton::Primary, at(300.0, 20.0));
    assert_eq!(
        down.capture_command,
        Some(DragCaptureCommand::Acquire { pointer_id: POINTER })
    );
    split.handle_drag(&mut host, &down);
    assert!(split.is_resizing());
    assert_eq!(
        host.mask().and_then(|mask| mask.get("cursor")),
        Some("col-resize")
    );
    split.handle_drag(&mut host, &tracker.capture_acquired(POINTER));

    for x in [320.0, 350.0, 340.0] {
        let dispatch = tracker.pointer_move(POINTER, at(x, 20.0));
        split.handle_drag(&mut host, &dispatch);
    }
    let up = tracker.pointer_up(POINTER, PointerButton::Primary, at(340.0, 20.0));
    assert_eq!(
        up.capture_command,
        Some(DragCaptureCommand::Release { pointer_id: POINTER })
    );
    split.handle_drag(&mut host, &up);

    assert_eq!(
        *calls.borrow(),
        Calls {
            started: 1,
            resizing: vec![320.0, 350.0, 340.0],
            ended: vec![340.0],
        }
    );
    assert_eq!(host.pane_rect(PaneSlot::First).width, 340.0);
    assert_eq!(host.pane_rect(PaneSlot::Second).width, 260.0);
    assert!(host.mask().is_none());
    assert!(!split.is_resizing());
}

#[test]
fn begin_then_end_keeps_size_and_unmounts_mask_once() {
    let mut host = host(SplitOrientation::Vertical);
    let (mut split, calls) = recording(SplitBoxProps::default());

    split.begin(&mut host);
    split.begin(&mut host);
    split.end(&mut host);
    split.end(&mut host);

    assert_eq!((host.mask_mounts(), host.mask_unmounts()), (1, 1));
    assert_eq!(host.pane_rect(PaneSlot::First).width, 300.0);
    assert_eq!(calls.borrow().ended, vec![300.0]);
    assert_eq!(calls.borrow().started, 1);
    assert!(host.pane_style(PaneSlot::First).is_empty());
}

#[test]
fn refresh_commits_size_into_render() {
    let mut host = host(SplitOrientation::Vertical);
    let props = SplitBoxProps::new(SplitConfig::default().with_refresh_on_end(true));
    let mut split = SplitBox::new(props);

    split.apply_signal(&mut host, DragSignal::Begin);
    split.apply_signal(
        &mut host,
        DragSignal::Update {
            delta_x: -60.0,
            delta_y: 5.0,
        },
    );
    split.apply_signal(&mut host, DragSignal::End);

    assert_eq!(split.sizes().first(), Some(&PaneSize::Px(240.0)));
    let expected = SplitBoxView {
        container: RenderedElement {
            key: "container",
            class_name: "x6-split-box x6-split-box-vertical".to_owned(),
            style: InlineStyle::new()
                .with("display", "flex")
                .with("flex", "1")
                .with("flex-direction", "row")
                .with("flex-shrink", "0")
                .with("height", "100%")
                .with("overflow", "hidden")
                .with("position", "relative")
                .with("width", "100%"),
        },
        first: RenderedElement {
            key: "first",
            class_name: "x6-split-box-item x6-split-box-item-primary".to_owned(),
            style: InlineStyle::new().with("flex", "none").with("width", "240px"),
        },
        resizer: RenderedElement {
            key: "resizer",
            class_name: "x6-split-box-resizer".to_owned(),
            style: InlineStyle::new(),
        },
        second: RenderedElement {
            key: "second",
            class_name: "x6-split-box-item x6-split-box-item-second".to_owned(),
            style: InlineStyle::new().with("flex", "1"),
        },
    };
    assert_eq!(split.render(), expected);
}

#[test]
fn swapped_order_inverts_drag_direction() {
    let mut host = host(SplitOrientation::Vertical);
    host.set_pane_order(PaneSlot::First, 2);
    host.set_pane_order(PaneSlot::Second, 1);
    let mut split = SplitBox::new(SplitBoxProps::default());

    split.begin(&mut host);
    split.update(&mut host, 40.0, 0.0);

    assert_eq!(host.pane_rect(PaneSlot::First).width, 260.0);
}

#[test]
fn swapped_order_with_second_primary_tracks_pointer() {
    let mut host = host(SplitOrientation::Vertical);
    host.set_pane_order(PaneSlot::First, 1);
    host.set_pane_order(PaneSlot::Second, 0);
    let props = SplitBoxProps::default().with_primary(PaneSlot::Second);
    let mut split = SplitBox::new(props);

    split.begin(&mut host);
    split.update(&mut host, 40.0, 0.0);

    assert_eq!(
        host.pane_style(PaneSlot::Second).get("width"),
        Some("340px")
    );
    assert_eq!(host.pane_rect(PaneSlot::Second).width, 340.0);
    assert_eq!(host.pane_rect(PaneSlot::First).width, 260.0);
}

#[test]
fn horizontal_second_primary_follows_pointer() {
    let mut host = host(SplitOrientation::Horizontal);
    let props = SplitBoxProps::default()
        .with_orientation(SplitOrientation::Horizontal)
        .with_primary(PaneSlot::Second);
    let mut split = SplitBox::new(props);

    split.begin(&mut host);
    assert_eq!(
        host.mask().and_then(|mask| mask.get("cursor")),
        Some("row-resize")
    );
    split.update(&mut host, 80.0, 30.0);

    assert_eq!(
        host.pane_style(PaneSlot::Second).get("height"),
        Some("170px")
    );
    assert_eq!(host.pane_rect(PaneSlot::First).height, 230.0);
}

#[test]
fn stepped_drag_snaps_to_multiples() {
    let mut host = host(SplitOrientation::Vertical);
    let config = SplitConfig::default()
        .with_step(10.0)
        .with_min_size(100.0)
        .with_max_size(500.0);
    let mut split = SplitBox::new(SplitBoxProps::new(config));

    split.begin(&mut host);
    split.update(&mut host, -23.0, 0.0);
    assert_eq!(host.pane_rect(PaneSlot::First).width, 280.0);
    split.update(&mut host, 43.0, 0.0);
    assert_eq!(host.pane_rect(PaneSlot::First).width, 320.0);
}

#[test]
fn bound_cursor_and_reentry() {
    let mut host = host(SplitOrientation::Vertical);
    let config = SplitConfig::default().with_min_size(100.0);
    let (mut split, calls) = recording(SplitBoxProps::new(config));

    split.begin(&mut host);
    split.update(&mut host, -250.0, 0.0);
    assert_eq!(
        host.mask().and_then(|mask| mask.get("cursor")),
        Some("e-resize")
    );
    // Pointer sits 50px past the bound; the pane stays put until it is back.
    for dx in [30.0, 40.0] {
        let tracked = split.update(&mut host, dx, 0.0);
        assert!(matches!(tracked.effect, ResizeEffect::Tracked { .. }));
    }
    split.update(&mut host, 10.0, 0.0);

    assert_eq!(calls.borrow().resizing, vec![100.0, 130.0]);
    assert_eq!(host.pane_rect(PaneSlot::First).width, 130.0);
    assert_eq!(
        host.mask().and_then(|mask| mask.get("cursor")),
        Some("col-resize")
    );
}

#[test]
fn blur_ends_gesture_and_drops_mask() {
    let mut host = host(SplitOrientation::Vertical);
    let (mut split, calls) = recording(SplitBoxProps::default());
    let mut tracker = DragTracker::default();

    split.handle_drag(
        &mut host,
        &tracker.pointer_down(POINTER, PointerButton::Primary, at(300.0, 0.0)),
    );
    split.handle_drag(&mut host, &tracker.pointer_move(POINTER, at(310.0, 0.0)));
    split.handle_drag(&mut host, &tracker.blur());

    assert!(!split.is_resizing());
    assert!(host.mask().is_none());
    assert_eq!(calls.borrow().ended, vec![310.0]);

    let late = tracker.pointer_move(POINTER, at(400.0, 0.0));
    assert_eq!(split.handle_drag(&mut host, &late), None);
    assert_eq!(host.pane_rect(PaneSlot::First).width, 310.0);
}

#[test]
fn disabled_box_ignores_the_whole_gesture() {
    let mut host = host(SplitOrientation::Vertical);
    let props = SplitBoxProps::new(SplitConfig::default().with_resizable(false));
    let (mut split, calls) = recording(props);
    let mut tracker = DragTracker::default();

    split.handle_drag(
        &mut host,
        &tracker.pointer_down(POINTER, PointerButton::Primary, at(300.0, 0.0)),
    );
    split.handle_drag(&mut host, &tracker.pointer_move(POINTER, at(360.0, 0.0)));
    split.handle_drag(
        &mut host,
        &tracker.pointer_up(POINTER, PointerButton::Primary, at(360.0, 0.0)),
    );

    assert_eq!(*calls.borrow(), Calls::default());
    assert_eq!(host.mask_mounts(), 0);
    assert_eq!(host.pane_rect(PaneSlot::First).width, 300.0);
}

proptest! {
    #[test]
    fn mask_is_balanced_across_random_gestures(
        moves in prop::collection::vec(-120.0f64..120.0, 0..24),
        interrupt in 0u8..4,
    ) {
        let mut host = host(SplitOrientation::Vertical);
        let mut split = SplitBox::new(SplitBoxProps::default());
        let mut tracker = DragTracker::default();

        let mut x = 300.0;
        split.handle_drag(
            &mut host,
            &tracker.pointer_down(POINTER, PointerButton::Primary, at(x, 0.0)),
        );
        prop_assert_eq!(host.mask_mounts(), 1);
        for dx in moves {
            x += dx;
            split.handle_drag(&mut host, &tracker.pointer_move(POINTER, at(x, 0.0)));
            let width = host.pane_rect(PaneSlot::First).width;
            prop_assert!((0.0..=600.0).contains(&width));
        }
        let finish = match interrupt {
            0 => tracker.pointer_up(POINTER, PointerButton::Primary, at(x, 0.0)),
            1 => tracker.pointer_cancel(Some(POINTER)),
            2 => tracker.visibility_hidden(),
            _ => tracker.lost_pointer_capture(POINTER),
        };
        split.handle_drag(&mut host, &finish);

        prop_assert!(!split.is_resizing());
        prop_assert!(host.mask().is_none());
        prop_assert_eq!(host.mask_unmounts(), 1);
    }
}
