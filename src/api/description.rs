use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};

/// Raw chart description as produced by the upstream authoring pipeline.
///
/// Decoded but not interpreted here: the metadata fields and tabular rows are
/// carried for the I/O wrapper, which decides what (if anything) to feed into
/// the composer overrides. Missing fields decode to their empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartDescription {
    pub source: String,
    pub label_interval: String,
    pub decimal_places: String,
    pub unit: String,
    pub x_axis_label: String,
    pub aspect_ratio: String,
    pub chart_type: String,
    /// Raw tabular rows, ordered; keys keep file order.
    pub data: Vec<IndexMap<String, String>>,
}

impl ChartDescription {
    pub fn from_json_slice(bytes: &[u8]) -> OptionsResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| OptionsError::DecodeInput(format!("failed to parse description: {e}")))
    }

    pub fn from_json_str(input: &str) -> OptionsResult<Self> {
        Self::from_json_slice(input.as_bytes())
    }
}
