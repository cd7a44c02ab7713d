use chart_options::api::{Axis, AxisTitleStyle, OptionsComposer};
use chart_options::core::{SeriesEntry, StyleMap, template};
use serde_json::{Value, json};

fn wire_value(composer: &OptionsComposer) -> Value {
    serde_json::from_str(&composer.to_json().expect("composed json")).expect("json parses")
}

#[test]
fn set_chart_type_changes_only_the_type_discriminator() {
    let mut composer = OptionsComposer::new();
    composer.set_chart_type("area");
    let actual = wire_value(&composer);

    let template_json = template::baseline().to_wire_json().expect("template json");
    let mut expected: Value = serde_json::from_str(&template_json).expect("template parses");
    expected["chart"]["type"] = Value::from("area");

    assert_eq!(actual, expected);
}

#[test]
fn later_chart_type_override_wins() {
    let mut composer = OptionsComposer::new();
    composer.set_chart_type("line");
    composer.set_chart_type("area");
    assert_eq!(composer.options().chart.kind, "area");
}

#[test]
fn set_series_round_trips_order_and_values() {
    let mut composer = OptionsComposer::new();
    composer.set_series(vec![
        SeriesEntry::new("EU", vec![61.2, 60.1]),
        SeriesEntry::new("Non-EU", vec![38.8, 39.9]),
    ]);
    let value = wire_value(&composer);

    assert_eq!(
        value["series"],
        json!([
            {"name": "EU", "data": [61.2, 60.1]},
            {"name": "Non-EU", "data": [38.8, 39.9]}
        ])
    );
}

#[test]
fn set_series_replaces_the_whole_collection() {
    let mut composer = OptionsComposer::new();
    composer.set_series(vec![SeriesEntry::new("first", vec![1.0])]);
    composer.set_series(vec![SeriesEntry::new("second", vec![2.0, 3.0])]);

    let options = composer.into_options();
    assert_eq!(options.series.len(), 1);
    assert_eq!(options.series[0].name, "second");
    assert_eq!(options.series[0].data, vec![2.0, 3.0]);
}

#[test]
fn y_axis_title_override_replaces_the_whole_group() {
    let mut style = StyleMap::new();
    style.insert("left".to_owned(), Value::from("0px"));
    style.insert("right".to_owned(), Value::from("0px"));

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
    let value = wire_value(&composer);

    let title = value["yAxis"]["title"].as_object().expect("title object");
    assert_eq!(title.len(), 5, "title must hold exactly five keys");
    assert_eq!(title["align"], "high");
    assert_eq!(title["offset"], 0);
    assert_eq!(title["y"], -4);
    assert_eq!(title["rotation"], 360);
    assert_eq!(title["style"], json!({"left": "0px", "right": "0px"}));
}

#[test]
fn x_axis_title_override_leaves_the_y_axis_alone() {
    let mut style = StyleMap::new();
    style.insert("top".to_owned(), Value::from("4px"));

    let mut composer = OptionsComposer::new();
    composer.set_axis_title_style(
        Axis::X,
        AxisTitleStyle {
            align: "middle".to_owned(),
            offset: 10,
            y: 2,
            rotation: 0,
            style,
        },
    );
    let value = wire_value(&composer);

    let x_title = value["xAxis"]["title"].as_object().expect("xAxis title");
    assert_eq!(x_title.len(), 5);
    assert_eq!(x_title["align"], "middle");
    assert_eq!(x_title["offset"], 10);

    let y_title = value["yAxis"]["title"].as_object().expect("yAxis title");
    assert_eq!(y_title["text"], "%");
    assert_eq!(y_title["useHTML"], Value::Bool(true));
    assert_eq!(y_title["style"], Value::Null);
}

#[test]
fn style_map_values_pass_through_verbatim() {
    let mut style = StyleMap::new();
    style.insert("font-size".to_owned(), Value::from(11));
    style.insert("visible".to_owned(), Value::Bool(true));
    style.insert("color".to_owned(), Value::Null);

    let mut composer = OptionsComposer::new();
    composer.set_axis_title_style(
        Axis::Y,
        AxisTitleStyle {
            align: "low".to_owned(),
            offset: 0,
            y: 0,
            rotation: 0,
            style,
        },
    );
    let value = wire_value(&composer);

    assert_eq!(
        value["yAxis"]["title"]["style"],
        json!({"font-size": 11, "visible": true, "color": null})
    );
}

#[test]
fn from_options_composes_over_a_caller_supplied_base() {
    let mut base = template::baseline();
    base.credits.enabled = true;

    let mut composer = OptionsComposer::from_options(base);
    composer.set_chart_type("bar");

    let options = composer.into_options();
    assert!(options.credits.enabled);
    assert_eq!(options.chart.kind, "bar");
}
