//! Rendering of synthesized property models.

pub mod json;
pub mod terminal;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::core::ClassProperties;

/// Render the models in the requested format.
pub fn render(models: &[ClassProperties], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(terminal::render(models)),
        OutputFormat::Json => json::render(models),
    }
}
