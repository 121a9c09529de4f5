// ============================================================================
// Engine Configuration
// Buffer sizing and operand limits for the decimal arithmetic engine
// ============================================================================

use crate::arithmetic::{ArithmeticError, ArithmeticResult};
use crate::buffer::DEFAULT_CAPACITY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration shared by the arithmetic functions and [`DecimalEngine`].
///
/// [`DecimalEngine`]: crate::engine::DecimalEngine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Starting capacity of every buffer the engine allocates
    /// (new result buffers and transient partial product rows)
    pub initial_capacity: usize,

    /// Optional: Maximum number of bytes accepted per operand
    /// None means operands are limited only by available memory
    pub max_operand_len: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_operand_len: None,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default buffer sizing and no operand limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set starting buffer capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder method: Set maximum operand length
    pub fn with_max_operand_len(mut self, max_len: usize) -> Self {
        self.max_operand_len = Some(max_len);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_capacity == 0 {
            return Err("Initial capacity must hold at least the terminator".to_string());
        }

        if self.max_operand_len == Some(0) {
            return Err("Maximum operand length must be positive".to_string());
        }

        Ok(())
    }

    /// Reject an operand of `len` bytes if it exceeds `max_operand_len`.
    pub(crate) fn check_operand_len(&self, len: usize) -> ArithmeticResult<()> {
        match self.max_operand_len {
            Some(max) if len > max => {
                tracing::warn!(len, max, "operand exceeds configured limit");
                Err(ArithmeticError::OperandTooLong { len, max })
            },
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Minimal-footprint configuration
    /// - Buffers start with room for the terminator only
    /// - Every byte written costs exactly one byte of growth
    pub fn compact() -> Self {
        Self::new().with_initial_capacity(1)
    }

    /// Bounded configuration for untrusted input
    /// - Default buffer sizing
    /// - Operands longer than `max_operand_len` bytes are rejected up front
    pub fn bounded(max_operand_len: usize) -> Self {
        Self::new().with_max_operand_len(max_operand_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = EngineConfig::new();

        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.max_operand_len, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_initial_capacity(64)
            .with_max_operand_len(1000);

        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.max_operand_len, Some(1000));
    }

    #[test]
    fn test_validation() {
        assert!(EngineConfig::new()
            .with_initial_capacity(0)
            .validate()
            .is_err());
        assert!(EngineConfig::bounded(0).validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let compact = EngineConfig::compact();
        assert_eq!(compact.initial_capacity, 1);
        assert!(compact.validate().is_ok());

        let bounded = EngineConfig::bounded(128);
        assert_eq!(bounded.max_operand_len, Some(128));
        assert!(bounded.validate().is_ok());
    }

    #[test]
    fn test_operand_limit() {
        let bounded = EngineConfig::bounded(4);
        assert!(bounded.check_operand_len(4).is_ok());
        assert_eq!(
            bounded.check_operand_len(5),
            Err(ArithmeticError::OperandTooLong { len: 5, max: 4 })
        );
        assert!(EngineConfig::new().check_operand_len(usize::MAX).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = EngineConfig::bounded(256).with_initial_capacity(32);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
