use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ratatui::{backend::TestBackend, Terminal};

use belfry::{
    core::{msg::clock::ClockMsg, state::AppState},
    domain::{
        angles::HandAngles,
        dial::{self, DialMetrics},
    },
    infrastructure::config::Config,
    presentation::components::Components,
    test_helpers::local_time,
};

fn geometry(metrics: &DialMetrics) -> usize {
    dial::minute_ticks(metrics).len()
        + dial::ornament_markers(metrics).len()
        + dial::numerals(metrics).len()
        + dial::sunburst(metrics.face_radius * 0.2, metrics.mandala_radius()).len()
}

fn benchmark(c: &mut Criterion) {
    let now = local_time(10, 9, 30, 250);

    c.bench_function("hand-angles", |b| {
        b.iter(|| HandAngles::at(black_box(&now)))
    });

    c.bench_function("dial-geometry", |b| {
        b.iter(|| geometry(black_box(&DialMetrics::WIDE)))
    });

    let config = Config::defaults().unwrap_or_default();
    let mut state = AppState::new_with_config(config, 20.0);
    state.clock.update(ClockMsg::Sample(now));
    let components = Components::new();
    c.bench_function("full-frame-160x50", |b| {
        let Ok(mut terminal) = Terminal::new(TestBackend::new(160, 50)) else {
            return;
        };
        b.iter(|| terminal.draw(|f| components.render(f, black_box(&state))))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
