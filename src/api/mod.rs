pub mod composer;
pub mod description;
pub mod json_contract;

pub use composer::{Axis, AxisTitleStyle, OptionsComposer};
pub use description::ChartDescription;
