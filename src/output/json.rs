//! JSON rendering of the property model.

use anyhow::Result;

use crate::core::ClassProperties;

/// Render all synthesized class models as pretty-printed JSON.
pub fn render(models: &[ClassProperties]) -> Result<String> {
    Ok(serde_json::to_string_pretty(models)?)
}
