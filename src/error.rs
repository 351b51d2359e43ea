//! Error types for planet generation and rendering

use std::fmt;

/// Errors that can occur while building or baking a body
#[derive(Debug, Clone, PartialEq)]
pub enum PlanetError {
    /// Configuration or palette validation failed
    InvalidConfiguration(String),
    /// A grid write or weighted selection fell outside its valid range
    OutOfRange(String),
}

impl fmt::Display for PlanetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanetError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
            PlanetError::OutOfRange(msg) => write!(f, "out of range: {}", msg),
        }
    }
}

impl std::error::Error for PlanetError {}

/// Result type alias for planet operations
pub type Result<T> = std::result::Result<T, PlanetError>;
