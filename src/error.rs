//! Error types for cloth construction and commands.

use core::fmt;

/// Errors that can occur while building or reconfiguring a cloth.
///
/// Degenerate geometry (coincident particles) is not an error: the affected
/// spring or collision pair is skipped for that tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Radius must be positive and finite.
    InvalidRadius,
    /// A topology parameter was rejected; the previous topology is kept.
    InvalidTopologyParameter { parameter: &'static str },
    /// The parameter name is not one of rows, cols, spacing, stiffness, damping.
    UnknownParameter,
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// World width and height must be positive and finite.
    InvalidWorldBounds,
    /// Collision cell size must be positive and finite.
    InvalidCellSize,
    /// Drag and collision damping must be non-negative and finite.
    InvalidDamping,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::InvalidRadius => write!(f, "radius must be positive and finite"),
            ClothError::InvalidTopologyParameter { parameter } => {
                write!(f, "invalid topology parameter `{}`", parameter)
            }
            ClothError::UnknownParameter => {
                write!(f, "unknown parameter (expected rows, cols, spacing, stiffness or damping)")
            }
            ClothError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            ClothError::InvalidWorldBounds => write!(f, "world bounds must be positive and finite"),
            ClothError::InvalidCellSize => write!(f, "cell size must be positive and finite"),
            ClothError::InvalidDamping => write!(f, "damping factors must be non-negative and finite"),
        }
    }
}

impl core::error::Error for ClothError {}
