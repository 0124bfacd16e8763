//! Board configuration: extent, cell size, diagonal movement.

use std::fmt;

/// Configuration for creating a [`Board`](crate::Board).
///
/// Supplied once at construction and immutable for the board's lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Number of columns. Must be ≥ 1.
    pub width: i32,
    /// Number of rows. Must be ≥ 1.
    pub height: i32,
    /// Edge length of a tile's footprint in continuous space. Must be > 0.
    pub cell_size: f32,
    /// Whether diagonal steps are allowed at all.
    pub diagonal_movement: bool,
}

impl BoardConfig {
    /// Create a config with the given extent, unit cell size, and
    /// diagonal movement disabled.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cell_size: 1.0,
            diagonal_movement: false,
        }
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

/// An invalid board configuration. Surfaced at construction time.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height below 1.
    InvalidExtent { width: i32, height: i32 },
    /// Cell size not a positive finite number.
    InvalidCellSize(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(f, "board extent must be at least 1x1, got {width}x{height}")
            }
            Self::InvalidCellSize(s) => {
                write!(f, "cell size must be a positive finite number, got {s}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let cfg = BoardConfig::new(4, 3);
        assert_eq!(cfg.cell_size, 1.0);
        assert!(!cfg.diagonal_movement);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_extent() {
        assert!(BoardConfig::new(0, 3).validate().is_err());
        assert!(BoardConfig::new(3, -1).validate().is_err());
    }

    #[test]
    fn rejects_bad_cell_size() {
        let mut cfg = BoardConfig::new(3, 3);
        cfg.cell_size = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidCellSize(_))
        ));
        cfg.cell_size = f32::NAN;
        assert!(cfg.validate().is_err());
    }
}
