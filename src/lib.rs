//! chart-options: default-merge-and-serialize chart configuration builder.
//!
//! This crate turns a raw chart description into a fully-specified,
//! renderer-ready configuration object: a canonical set of presentation
//! defaults is copied, a bounded set of per-chart overrides is applied on
//! top, and the result is serialized with field-presence-sensitive JSON
//! output (unset fields are omitted rather than emitted as zero values).

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Axis, AxisTitleStyle, ChartDescription, OptionsComposer};
pub use core::{ChartOptions, SeriesEntry, StyleMap};
pub use error::{OptionsError, OptionsResult};
