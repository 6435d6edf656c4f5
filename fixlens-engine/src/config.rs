/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decoder configuration.
//!
//! This module provides configuration options for [`FixParser`](crate::FixParser).

use serde::{Deserialize, Serialize};

/// How the field separator is chosen when decoding a whole text blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DelimiterMode {
    /// Infer once from the first message and reuse it for the whole blob.
    #[default]
    PerBatch,
    /// Infer separately for every message.
    PerMessage,
}

/// Configuration for a FIX decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Fixed field separator. Inference is skipped when set.
    pub delimiter: Option<String>,
    /// Separator inference strategy for whole blobs.
    pub delimiter_mode: DelimiterMode,
    /// Whether a missing correlated message is an error.
    ///
    /// When `false`, the affected detail is left empty and a warning is logged.
    pub strict_correlation: bool,
    /// Maximum input size in bytes.
    pub max_input_size: usize,
}

impl DecoderConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: None,
            delimiter_mode: DelimiterMode::PerBatch,
            strict_correlation: true,
            max_input_size: 16 * 1024 * 1024, // 16MB
        }
    }

    /// Sets a fixed field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Sets the separator inference strategy.
    #[must_use]
    pub const fn with_delimiter_mode(mut self, mode: DelimiterMode) -> Self {
        self.delimiter_mode = mode;
        self
    }

    /// Sets whether missing correlations are errors.
    #[must_use]
    pub const fn with_strict_correlation(mut self, strict: bool) -> Self {
        self.strict_correlation = strict;
        self
    }

    /// Sets the maximum input size.
    #[must_use]
    pub const fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for decoder configuration.
#[derive(Debug, Default)]
pub struct DecoderConfigBuilder {
    delimiter: Option<String>,
    delimiter_mode: Option<DelimiterMode>,
    strict_correlation: Option<bool>,
    max_input_size: Option<usize>,
}

impl DecoderConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed field separator.
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Sets the separator inference strategy.
    #[must_use]
    pub const fn delimiter_mode(mut self, mode: DelimiterMode) -> Self {
        self.delimiter_mode = Some(mode);
        self
    }

    /// Sets whether missing correlations are errors.
    #[must_use]
    pub const fn strict_correlation(mut self, strict: bool) -> Self {
        self.strict_correlation = Some(strict);
        self
    }

    /// Sets the maximum input size.
    #[must_use]
    pub const fn max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = Some(size);
        self
    }

    /// Builds the configuration, using defaults for unset options.
    #[must_use]
    pub fn build(self) -> DecoderConfig {
        let mut config = DecoderConfig::new();

        config.delimiter = self.delimiter;
        if let Some(mode) = self.delimiter_mode {
            config.delimiter_mode = mode;
        }
        if let Some(strict) = self.strict_correlation {
            config.strict_correlation = strict;
        }
        if let Some(size) = self.max_input_size {
            config.max_input_size = size;
        }

        config
    }
}
