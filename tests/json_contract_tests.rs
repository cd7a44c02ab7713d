use chart_options::api::{Axis, AxisTitleStyle, OptionsComposer};
use chart_options::core::{ChartOptions, SeriesEntry, StyleMap, template};
use serde_json::Value;

#[test]
fn default_output_exposes_the_expected_top_level_keys() {
    let json = template::baseline().to_wire_json().expect("template json");
    let value: Value = serde_json::from_str(&json).expect("parses");
    let root = value.as_object().expect("root object");

    let expected = [
        "viewport",
        "chart",
        "colors",
        "title",
        "subtitle",
        "yAxis",
        "xAxis",
        "legend",
        "plotOptions",
        "annotationsOptions",
        "aspectRatio",
        "tooltip",
        "credits",
        "labels",
        "exporting",
    ];
    assert_eq!(root.len(), expected.len());
    for key in expected {
        assert!(root.contains_key(key), "missing top-level key {key}");
    }
}

#[test]
fn template_output_round_trips_through_the_wire_format() {
    let original = template::baseline();
    let json = original.to_wire_json().expect("serializes");
    let reparsed = ChartOptions::from_wire_json_str(&json).expect("parses back");
    assert_eq!(original, reparsed);
}

#[test]
fn composed_output_round_trips_through_the_wire_format() {
    let mut style = StyleMap::new();
    style.insert("left".to_owned(), Value::from("0px"));

    let mut composer = OptionsComposer::new();
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
    composer.set_series(vec![SeriesEntry::new("EU", vec![61.2, 60.1])]);
    composer.set_chart_type("line");

    let original = composer.into_options();
    let json = original.to_wire_json().expect("serializes");
    let reparsed = ChartOptions::from_wire_json_str(&json).expect("parses back");
    assert_eq!(original, reparsed);
}

#[test]
fn non_finite_series_values_serialize_as_null() {
    let mut composer = OptionsComposer::new();
    composer.set_series(vec![SeriesEntry::new(
        "broken",
        vec![1.0, f64::NAN, f64::INFINITY],
    )]);

    let json = composer.to_json().expect("still serializes");
    let value: Value = serde_json::from_str(&json).expect("parses");
    assert_eq!(value["series"][0]["data"][0], 1.0);
    assert_eq!(value["series"][0]["data"][1], Value::Null);
    assert_eq!(value["series"][0]["data"][2], Value::Null);
}

#[test]
fn pretty_and_compact_output_carry_the_same_document() {
    let options = template::baseline();
    let compact: Value =
        serde_json::from_str(&options.to_wire_json().expect("compact")).expect("parses");
    let pretty: Value =
        serde_json::from_str(&options.to_wire_json_pretty().expect("pretty")).expect("parses");
    assert_eq!(compact, pretty);
}
