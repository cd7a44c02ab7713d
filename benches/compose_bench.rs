use chart_options::api::{Axis, AxisTitleStyle, OptionsComposer};
use chart_options::core::{SeriesEntry, StyleMap, template};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::Value;
use std::hint::black_box;

fn bench_baseline_copy(c: &mut Criterion) {
    c.bench_function("baseline_copy", |b| {
        b.iter(|| black_box(template::baseline()))
    });
}

fn bench_compose_and_serialize(c: &mut Criterion) {
    let eu: Vec<f64> = (0..64).map(|i| 60.0 - f64::from(i) * 0.2).collect();
    let non_eu: Vec<f64> = eu.iter().map(|v| 100.0 - v).collect();

    c.bench_function("compose_and_serialize", |b| {
        b.iter(|| {
            let mut composer = OptionsComposer::new();
            let mut style = StyleMap::new();
            style.insert("left".to_owned(), Value::from("0px"));
            style.insert("right".to_owned(), Value::from("0px"));
            composer.set_axis_title_style(
                Axis::Y,
                AxisTitleStyle {
                    align: "high".to_owned(),
                    offset: 0,
                    y: -4,
                    rotation: 360,
                    style,
                },
            );
            composer.set_series(vec![
                SeriesEntry::new("EU", black_box(eu.clone())),
                SeriesEntry::new("Non-EU", black_box(non_eu.clone())),
            ]);
            composer.set_chart_type("line");
            composer.to_json().expect("compose json")
        })
    });
}

criterion_group!(benches, bench_baseline_copy, bench_compose_and_serialize);
criterion_main!(benches);
