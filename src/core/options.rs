//! Renderer configuration schema and its field-presence policy.
//!
//! The schema is closed: every group is a fixed record and only values vary
//! between instances. Wire-format presence is declared field by field through
//! the serde attributes in this module — nothing is inferred from values at
//! serialization time:
//!
//! - plain fields are always emitted, including `false`, `0` and `""`
//!   (`legend.enabled`, `chart.type`, `xAxis.tickmarkPlacement`, ...);
//! - `Option` fields with `skip_serializing_if` and `Vec` fields skipped when
//!   empty are omitted from the output while unset;
//! - `AxisTitle.style` is the one field that serializes as JSON `null` while
//!   unset and as an object once assigned.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open-ended CSS-like styling map. Keys keep insertion order; values are
/// accepted verbatim.
pub type StyleMap = IndexMap<String, Value>;

/// Root configuration object consumed by the external charting renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    pub chart: ChartBlock,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesEntry>,
    pub title: TitleBlock,
    pub subtitle: TitleBlock,
    pub y_axis: YAxisBlock,
    pub x_axis: XAxisBlock,
    pub legend: LegendBlock,
    pub plot_options: PlotOptionsBlock,
    pub annotations_options: AnnotationsOptionsBlock,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Value>,
    pub aspect_ratio: f64,
    pub tooltip: TooltipBlock,
    pub credits: CreditsBlock,
    pub labels: LabelsBlock,
    pub exporting: ExportingBlock,
}

/// One named data series. Replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub name: String,
    pub data: Vec<f64>,
}

impl SeriesEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    /// Renderer series-type discriminator ("line", "area", "bar", ...).
    /// Always emitted, even while empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub style: ChartStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Shared shape for `title` and `subtitle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisBlock {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plot_bands: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plot_lines: Vec<Value>,
    pub title: AxisTitle,
    pub labels: AxisLabels,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_z_index: Option<i32>,
    pub opposite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisBlock {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plot_bands: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plot_lines: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<u32>,
    pub title: AxisTitle,
    pub labels: AxisLabels,
    pub opposite: bool,
    /// Always emitted, even while empty.
    #[serde(default)]
    pub tickmark_placement: String,
}

/// Axis title group.
///
/// `text`, `useHTML` and `align` exist on the wire only while assigned;
/// `offset`, `y` and `rotation` are always emitted. `style` is `null` until
/// a styling map is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "useHTML", default, skip_serializing_if = "Option::is_none")]
    pub use_html: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    pub offset: i32,
    pub y: i32,
    pub rotation: i32,
    #[serde(default)]
    pub style: Option<StyleMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "useHTML")]
    pub use_html: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(rename = "useHTML")]
    pub use_html: bool,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_margin_bottom: Option<u32>,
    pub item_style: LegendItemStyle,
    pub navigation: LegendNavigation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendNavigation {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptionsBlock {
    pub series: PlotSeriesOptions,
    pub line: PlotLineOptions,
    pub area: PlotAreaOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSeriesOptions {
    pub border_width: u32,
    pub animation: bool,
    pub point_padding: u32,
    pub group_padding: f64,
    pub states: PlotSeriesStates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeriesStates {
    pub hover: PlotSeriesHover,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeriesHover {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLineOptions {
    pub line_width: u32,
    pub marker: PlotLineMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLineMarker {
    pub enabled: bool,
    pub radius: u32,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotAreaOptions {
    pub stacking: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationsOptionsBlock {
    pub enabled_buttons: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipBlock {
    pub value_decimals: u32,
    pub shared: bool,
    #[serde(rename = "useHTML")]
    pub use_html: bool,
    pub style: TooltipStyle,
    pub background_color: String,
    pub border_width: u32,
    pub padding: u32,
    pub border_radius: u32,
    pub border_color: String,
    pub shadow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditsBlock {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsBlock {
    #[serde(rename = "useHTML")]
    pub use_html: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportingBlock {
    pub enabled: bool,
}
