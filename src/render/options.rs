//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for rendering documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Indentation emitted per group level
    pub indent: IndentStyle,

    /// Emit `declare(strict_types=1);` in file headers
    pub strict_types: bool,

    /// Emit the `<?php` open tag in file headers
    pub open_tag: bool,

    /// Maximum consecutive blank lines (0 = unlimited)
    pub max_blank_lines: u8,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable the strict types declaration.
    pub fn with_strict_types(mut self, enabled: bool) -> Self {
        self.strict_types = enabled;
        self
    }

    /// Enable or disable the open tag.
    pub fn with_open_tag(mut self, enabled: bool) -> Self {
        self.open_tag = enabled;
        self
    }

    /// Set the maximum number of consecutive blank lines.
    pub fn with_max_blank_lines(mut self, max: u8) -> Self {
        self.max_blank_lines = max;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            strict_types: true,
            open_tag: true,
            max_blank_lines: 1,
        }
    }
}

/// Indentation used for one group level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    /// A fixed number of spaces
    Spaces(u8),
    /// One tab character
    Tabs,
}

impl IndentStyle {
    /// Get the text for a single level.
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(width) => " ".repeat(usize::from(*width)),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(4)
    }
}
