// ============================================================================
// Processor Configuration
// Addend and report format for line-oriented file checking
// ============================================================================

use crate::numeric::is_valid_decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Addend used when none is configured
pub const DEFAULT_ADDEND: &str = "-123.456";

// ============================================================================
// Report Format
// ============================================================================

/// How processing results are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Human-readable progress lines
    #[default]
    Text,
    /// One JSON object per event
    #[cfg_attr(feature = "cli", value(name = "json"))]
    JsonLines,
}

// ============================================================================
// Processor Configuration
// ============================================================================

/// Configuration for a [`LineProcessor`](super::LineProcessor)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessorConfig {
    /// Decimal string added to every valid line
    pub addend: String,

    /// Output format for reports
    pub format: ReportFormat,
}

impl ProcessorConfig {
    /// Create a configuration with the default addend and text output
    pub fn new() -> Self {
        Self {
            addend: DEFAULT_ADDEND.to_string(),
            format: ReportFormat::Text,
        }
    }

    /// Builder method: Set the addend
    pub fn with_addend(mut self, addend: impl Into<String>) -> Self {
        self.addend = addend.into();
        self
    }

    /// Builder method: Set the report format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_decimal(&self.addend) {
            return Err(format!(
                "Addend must be a decimal number, got {:?}",
                self.addend
            ));
        }

        Ok(())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}
