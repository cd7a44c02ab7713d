use crate::core::ChartOptions;
use crate::error::{OptionsError, OptionsResult};

impl ChartOptions {
    /// Serializes to the renderer wire format.
    ///
    /// Field presence follows the policy declared in `core::options`: either
    /// a complete configuration object comes back, or an error and nothing.
    pub fn to_wire_json(&self) -> OptionsResult<String> {
        serde_json::to_string(self)
            .map_err(|e| OptionsError::Serialize(format!("failed to serialize options: {e}")))
    }

    /// Pretty-printed variant of [`ChartOptions::to_wire_json`] for debug
    /// output and fixtures.
    pub fn to_wire_json_pretty(&self) -> OptionsResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OptionsError::Serialize(format!("failed to serialize options: {e}")))
    }

    /// Parses a configuration previously produced by this crate.
    pub fn from_wire_json_str(input: &str) -> OptionsResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| OptionsError::DecodeInput(format!("failed to parse options json: {e}")))
    }
}
