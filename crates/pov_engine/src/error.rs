//! Unified error types for pov_engine

use thiserror::Error;

/// Main error type for pov_engine operations
///
/// Drawing itself never fails: out of range coordinates are clipped.
/// Only configuration changes and pattern lookups can be rejected, and a
/// rejected call leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PovError {
    // === Configuration Errors ===
    #[error("Grid width {width} out of range ({min}..={max})")]
    InvalidWidth { width: i32, min: i32, max: i32 },

    // === Pattern Errors ===
    #[error("Unknown pattern: {name}")]
    UnknownPattern { name: String },

    #[error("No glyph for letter '{letter}' (only A-Z are available)")]
    UnknownLetter { letter: char },

    // === Selector Errors ===
    #[error("Unknown output format: {name} (expected 'heart' or 'hanzi')")]
    UnknownFormat { name: String },

    #[error("Unknown tool: {name} (expected 'draw', 'erase', 'line' or 'circle')")]
    UnknownTool { name: String },
}

/// Result type alias for pov_engine operations
pub type Result<T> = std::result::Result<T, PovError>;

// === Convenience constructors ===
impl PovError {
    /// Create an unknown pattern error
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }

    /// True for errors caused by an invalid grid configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidWidth { .. })
    }

    /// True for errors caused by an unknown pattern or glyph
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, Self::UnknownPattern { .. } | Self::UnknownLetter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = PovError::InvalidWidth { width: 0, min: 1, max: 64 };
        assert!(err.is_configuration_error());
        assert!(!err.is_pattern_error());

        assert!(PovError::unknown_pattern("star").is_pattern_error());
        assert!(PovError::UnknownLetter { letter: '7' }.is_pattern_error());
        assert!(!PovError::UnknownTool { name: "spray".to_string() }.is_pattern_error());
    }

    #[test]
    fn test_error_messages() {
        let err = PovError::InvalidWidth { width: 65, min: 1, max: 64 };
        assert_eq!(err.to_string(), "Grid width 65 out of range (1..=64)");
        assert_eq!(PovError::unknown_pattern("star").to_string(), "Unknown pattern: star");
    }
}
