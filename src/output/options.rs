use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::energy::NumberFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled lines, one block per magnitude
    #[default]
    List,
    /// Tab-separated values for scripting
    Tsv,
    /// JSON with raw numeric values
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => should_use_colors(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Everything the renderers need to know, resolved from config and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub numbers: NumberFormat,
    pub colors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::List,
            numbers: NumberFormat::default(),
            colors: false,
        }
    }
}
