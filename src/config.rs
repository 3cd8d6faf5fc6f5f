//! Queue geometry and its validation.

use thiserror::Error;

use crate::Word;

/// Construction-time misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("capacity must be at least one slot")]
    ZeroCapacity,

    // cursors count modulo 2 * capacity
    #[error("capacity {capacity} cannot be tracked by a cursor counting modulo twice the capacity")]
    CapacityOverflow { capacity: usize },

    #[error("data width {width} is outside 1..={max}")]
    InvalidWidth { width: u32, max: u32 },
}

/// Geometry of a queue: number of slots and logical data width in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    pub width: u32,
}

impl Config {
    /// Creates a configuration. Nothing is checked until [`Config::validate`].
    pub const fn new(capacity: usize, width: u32) -> Self {
        Self { capacity, width }
    }

    /// Checks the geometry against the element container `T`.
    pub fn validate<T: Word>(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity.checked_mul(2).is_none() {
            return Err(ConfigError::CapacityOverflow { capacity: self.capacity });
        }
        if self.width == 0 || self.width > T::BITS {
            return Err(ConfigError::InvalidWidth { width: self.width, max: T::BITS });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reference_geometry() {
        assert_eq!(Config::new(16, 8).validate::<u8>(), Ok(()));
        assert_eq!(Config::new(3, 1).validate::<u64>(), Ok(()));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(Config::new(0, 8).validate::<u8>(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn rejects_unrepresentable_capacity() {
        let capacity = usize::MAX / 2 + 1;
        assert_eq!(Config::new(capacity, 8).validate::<u8>(), Err(ConfigError::CapacityOverflow { capacity }));
    }

    #[test]
    fn rejects_bad_width() {
        assert_eq!(Config::new(4, 0).validate::<u16>(), Err(ConfigError::InvalidWidth { width: 0, max: 16 }));
        assert_eq!(Config::new(4, 9).validate::<u8>(), Err(ConfigError::InvalidWidth { width: 9, max: 8 }));
        assert_eq!(ConfigError::InvalidWidth { width: 9, max: 8 }.to_string(), "data width 9 is outside 1..=8");
    }
}
