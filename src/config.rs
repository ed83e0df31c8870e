use crate::{error::ConfigError, limits::Limits};

/// Top-level decoder configuration model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Structural limits.
    pub limits: Limits,
}

impl DecoderConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that every configured limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_depth == 0 {
            return Err(ConfigError::InvalidLimitValue { limit: "max_depth" });
        }

        if self.limits.max_parts == Some(0) {
            return Err(ConfigError::InvalidLimitValue { limit: "max_parts" });
        }

        Ok(())
    }
}
