pub mod options;
pub mod template;

pub use options::{
    AnnotationsOptionsBlock, AxisLabels, AxisTitle, ChartBlock, ChartOptions, ChartStyle,
    CreditsBlock, ExportingBlock, LabelsBlock, LegendBlock, LegendItemStyle, LegendNavigation,
    PlotAreaOptions, PlotLineMarker, PlotLineOptions, PlotOptionsBlock, PlotSeriesHover,
    PlotSeriesOptions, PlotSeriesStates, SeriesEntry, StyleMap, TitleBlock, TooltipBlock,
    TooltipStyle, XAxisBlock, YAxisBlock,
};
pub use template::baseline;
