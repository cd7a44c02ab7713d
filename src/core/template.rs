//! Canonical presentation defaults.
//!
//! `baseline()` is a pure factory: every call builds a fresh value from
//! literal constants, so callers can never observe each other's overrides
//! through a shared instance.

use crate::core::options::{
    AnnotationsOptionsBlock, AxisLabels, AxisTitle, ChartBlock, ChartOptions, ChartStyle,
    CreditsBlock, ExportingBlock, LabelsBlock, LegendBlock, LegendItemStyle, LegendNavigation,
    PlotAreaOptions, PlotLineMarker, PlotLineOptions, PlotOptionsBlock, PlotSeriesHover,
    PlotSeriesOptions, PlotSeriesStates, TitleBlock, TooltipBlock, TooltipStyle, XAxisBlock,
    YAxisBlock,
};

/// Returns an independently mutable copy of the default chart configuration.
#[must_use]
pub fn baseline() -> ChartOptions {
    ChartOptions {
        viewport: Some("lg".to_owned()),
        chart: ChartBlock {
            height: Some(392),
            width: Some(700),
            margin_right: Some(35),
            margin_top: Some(150),
            margin_bottom: Some(150),
            spacing_top: Some(16),
            offset: Some(150),
            kind: String::new(),
            style: ChartStyle {
                font_family: Some(r#""Open Sans", Tahoma, Verdana, Arial"#.to_owned()),
            },
        },
        colors: [
            "rgba(39,71,150,0.9)",
            "rgba(245,148,47,0.9)",
            "rgba(231,63,64,0.9)",
            "rgba(123,202,226,0.9)",
            "rgba(151,151,150,0.9)",
            "rgba(233,225,23,0.9)",
            "rgba(116,182,48,0.9)",
            "rgba(103,71,150,0.9)",
            "rgba(189,91,158,0.9)",
        ]
        .map(str::to_owned)
        .to_vec(),
        series: Vec::new(),
        title: TitleBlock {
            text: Some(
                "Figure 5: UK goods exports to the EU and non-EU areas, percentage of total \
                 UK goods exports, current prices, 1999 to 2015"
                    .to_owned(),
            ),
            y: Some(30),
        },
        subtitle: TitleBlock {
            text: None,
            y: Some(80),
        },
        y_axis: YAxisBlock {
            plot_bands: Vec::new(),
            plot_lines: Vec::new(),
            title: AxisTitle {
                text: Some("%".to_owned()),
                use_html: Some(true),
                align: Some("high".to_owned()),
                offset: 0,
                y: 0,
                rotation: 0,
                style: None,
            },
            labels: AxisLabels {
                format: Some("{value:,.f}".to_owned()),
                use_html: true,
            },
            grid_z_index: Some(-200),
            opposite: false,
        },
        x_axis: XAxisBlock {
            plot_bands: Vec::new(),
            plot_lines: Vec::new(),
            categories: [
                "1999", "2000", "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008",
                "2009", "2010", "2011", "2012", "2013", "2014", "2015",
            ]
            .map(str::to_owned)
            .to_vec(),
            tick_interval: Some(2),
            title: AxisTitle {
                text: None,
                use_html: Some(true),
                align: None,
                offset: 0,
                y: 0,
                rotation: 0,
                style: None,
            },
            labels: AxisLabels {
                format: None,
                use_html: true,
            },
            opposite: false,
            tickmark_placement: String::new(),
        },
        legend: LegendBlock {
            vertical_align: Some("top".to_owned()),
            y: Some(582),
            x: Some(30),
            use_html: true,
            enabled: true,
            align: Some("left".to_owned()),
            item_margin_bottom: Some(8),
            item_style: LegendItemStyle {
                font_weight: Some("normal".to_owned()),
                color: Some("rgb(112,112,112)".to_owned()),
            },
            navigation: LegendNavigation { enabled: false },
        },
        plot_options: PlotOptionsBlock {
            series: PlotSeriesOptions {
                border_width: 0,
                animation: false,
                point_padding: 0,
                group_padding: 0.1,
                states: PlotSeriesStates {
                    hover: PlotSeriesHover { enabled: false },
                },
            },
            line: PlotLineOptions {
                line_width: 2,
                marker: PlotLineMarker {
                    enabled: false,
                    radius: 2,
                    symbol: "circle".to_owned(),
                },
            },
            area: PlotAreaOptions {
                stacking: "normal".to_owned(),
            },
        },
        annotations_options: AnnotationsOptionsBlock {
            enabled_buttons: false,
        },
        annotations: Vec::new(),
        aspect_ratio: 0.56,
        tooltip: TooltipBlock {
            value_decimals: 1,
            shared: true,
            use_html: true,
            style: TooltipStyle { padding: 0 },
            background_color: "rgba(208,210,211,1)".to_owned(),
            border_width: 0,
            padding: 0,
            border_radius: 0,
            border_color: "rgba(255, 255, 255, 0)".to_owned(),
            shadow: false,
        },
        credits: CreditsBlock { enabled: false },
        labels: LabelsBlock { use_html: true },
        exporting: ExportingBlock { enabled: false },
    }
}
