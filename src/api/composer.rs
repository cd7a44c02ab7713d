use tracing::debug;

use crate::core::{AxisTitle, ChartOptions, SeriesEntry, StyleMap, template};
use crate::error::OptionsResult;

/// Axis selector for title overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Replacement contents for an axis title group.
///
/// Applying one of these discards whatever the base configuration held for
/// that title, including its text and HTML flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitleStyle {
    pub align: String,
    pub offset: i32,
    pub y: i32,
    pub rotation: i32,
    pub style: StyleMap,
}

/// Applies per-chart overrides on top of an independent copy of the default
/// configuration.
///
/// Every operation is a pure overwrite: nothing is read back, nothing fails,
/// and inputs are trusted by contract. Callers validate upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsComposer {
    options: ChartOptions,
}

impl OptionsComposer {
    /// Starts from a fresh copy of the canonical defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: template::baseline(),
        }
    }

    /// Starts from a caller-supplied base configuration.
    #[must_use]
    pub fn from_options(options: ChartOptions) -> Self {
        Self { options }
    }

    /// Replaces the selected axis's entire title group with
    /// `{align, offset, y, rotation, style}`.
    pub fn set_axis_title_style(&mut self, axis: Axis, style: AxisTitleStyle) {
        debug!(?axis, align = %style.align, "replace axis title");
        let title = AxisTitle {
            text: None,
            use_html: None,
            align: Some(style.align),
            offset: style.offset,
            y: style.y,
            rotation: style.rotation,
            style: Some(style.style),
        };
        match axis {
            Axis::X => self.options.x_axis.title = title,
            Axis::Y => self.options.y_axis.title = title,
        }
    }

    /// Replaces the whole series collection, preserving the given order.
    pub fn set_series(&mut self, series: Vec<SeriesEntry>) {
        debug!(count = series.len(), "replace series collection");
        self.options.series = series;
    }

    /// Overwrites the chart-type discriminator. The value is not checked
    /// against the renderer's supported set.
    pub fn set_chart_type(&mut self, kind: &str) {
        debug!(kind, "set chart type");
        self.options.chart.kind = kind.to_owned();
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn into_options(self) -> ChartOptions {
        self.options
    }

    pub fn to_json(&self) -> OptionsResult<String> {
        self.options.to_wire_json()
    }

    pub fn to_json_pretty(&self) -> OptionsResult<String> {
        self.options.to_wire_json_pretty()
    }
}

impl Default for OptionsComposer {
    fn default() -> Self {
        Self::new()
    }
}
