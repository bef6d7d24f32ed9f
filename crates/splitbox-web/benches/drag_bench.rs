#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use splitbox_web::{
    DragTracker, HeadlessHost, PointerButton, PointerPosition, Rect, SplitBox, SplitBoxProps,
    SplitConfig, SplitOrientation,
};
use std::hint::black_box;

fn pos(x: f64, y: f64) -> PointerPosition {
    PointerPosition::new(x, y)
}

fn bench_pointer_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("split/web_pointer/drag");
    let props = SplitBoxProps::new(
        SplitConfig::default()
            .with_min_size(100.0)
            .with_max_size(-100.0),
    );

    group.bench_function("down_ack_move_120_up", |b| {
        b.iter(|| {
            let mut host =
                HeadlessHost::new(SplitOrientation::Vertical, Rect::from_size(1_200.0, 800.0));
            let mut split = SplitBox::new(props.clone());
            let mut tracker = DragTracker::default();

            let down = tracker.pointer_down(7, PointerButton::Primary, pos(600.0, 10.0));
            black_box(split.handle_drag(&mut host, &down));
            black_box(tracker.capture_acquired(7).log.phase);

            for step in 0..120 {
                let x = 600.0 + f64::from(step % 40) * 9.0 - 180.0;
                let dispatch = tracker.pointer_move(7, pos(x, 10.0));
                black_box(split.handle_drag(&mut host, &dispatch));
            }

            let up = tracker.pointer_up(7, PointerButton::Primary, pos(600.0, 10.0));
            black_box(split.handle_drag(&mut host, &up));
        });
    });

    group.bench_function("render", |b| {
        let split = SplitBox::new(props.clone().with_default_size(420.0));
        b.iter(|| black_box(split.render()));
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_drag);
criterion_main!(benches);
