use crate::{config::DecoderConfig, error::ConfigError, limits::Limits, Decoder};

/// Builder for configuring a [`Decoder`].
#[derive(Debug, Clone, Default)]
pub struct DecoderBuilder {
    config: DecoderConfig,
}

impl DecoderBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current builder configuration snapshot.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Replaces the full builder configuration.
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the nesting depth ceiling.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.limits.max_depth = max_depth;
        self
    }

    /// Caps the total number of decoded parts.
    pub fn max_parts(mut self, max_parts: usize) -> Self {
        self.config.limits.max_parts = Some(max_parts);
        self
    }

    /// Sets all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Validates builder configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()
    }

    /// Finalizes and returns validated configuration.
    pub fn build_config(self) -> Result<DecoderConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Finalizes configuration and returns a decoder.
    pub fn build(self) -> Result<Decoder, ConfigError> {
        Decoder::with_config(self.build_config()?)
    }
}
