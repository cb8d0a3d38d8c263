// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for release animations.
//!
//! Measures the cost of:
//! - Settling a spring-back from a typical release
//! - Running a full drag and fly-off through a row

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Vector};
use iced_swipe::animation::{Spring, SpringConfig};
use iced_swipe::config::Config;
use iced_swipe::ui::swipe_list::{demo_items, row, SwipeRow, SwipeSettings};
use std::hint::black_box;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

/// Frames until a spring released 80 px out at 1500 px/s comes to rest.
fn bench_spring_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    group.bench_function("spring_settle", |b| {
        b.iter(|| {
            let mut spring = Spring::new(
                SpringConfig::default(),
                Vector::new(80.0, 0.0),
                Vector::ZERO,
                Vector::new(1500.0, 0.0),
            );
            let mut frames = 0_u32;
            while !spring.is_settled() && frames < 1_000 {
                spring.advance(FRAME);
                frames += 1;
            }
            black_box(frames);
        });
    });

    group.finish();
}

/// A complete triggered swipe on one row, from press to removal.
fn bench_row_fly_off(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");
    let settings = SwipeSettings::from_config(&Config::default(), 420.0);
    let item = demo_items().remove(0);

    group.bench_function("row_fly_off", |b| {
        b.iter(|| {
            let mut row = SwipeRow::new(0, item.clone(), settings);
            let t0 = Instant::now();
            row.handle(row::Message::DragStarted(Point::new(20.0, 30.0)), t0);
            for step in 1..=10_u16 {
                let x = 20.0 + f32::from(step) * 20.0;
                row.handle(
                    row::Message::DragMoved(Point::new(x, 30.0)),
                    t0 + FRAME * u32::from(step),
                );
            }
            row.handle(
                row::Message::DragEnded(Point::new(220.0, 30.0)),
                t0 + FRAME * 11,
            );
            while row.is_animating() {
                row.advance(FRAME);
            }
            black_box(row.phase());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spring_settle, bench_row_fly_off);
criterion_main!(benches);
