use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use navshell::{
    model::{navigation::NavigationModel, shell::render},
    presentation::{query::get_by_text, widgets::nav_bar::NavBarWidget},
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

fn model(routes: usize) -> NavigationModel {
    NavigationModel::new((0..routes).map(|i| (format!("Route {i}"), format!("/route/{i}"))))
        .unwrap_or_default()
}

fn benchmark(c: &mut Criterion) {
    let model = model(32);

    c.bench_function("render-tree", |b| b.iter(|| render(black_box(&model))));

    let tree = render(&model);
    c.bench_function("get-by-text", |b| {
        b.iter(|| get_by_text(black_box(&tree), black_box("Route 31")).is_ok())
    });

    let area = Rect::new(0, 0, 400, 1);
    c.bench_function("nav-bar-draw", |b| {
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            NavBarWidget::new(black_box(&tree)).render(area, &mut buf);
            buf
        })
    });

    c.bench_function("nav-bar-hit-test", |b| {
        b.iter(|| NavBarWidget::new(&tree).hit_test(area, black_box(350), 0))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
