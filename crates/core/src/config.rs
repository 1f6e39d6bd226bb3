//! Session parameter validation.

use crate::error::ConfigError;
use crate::types::GameConfig;

/// Check that board dimensions are usable.
pub fn validate_dimensions(rows: i32, cols: i32) -> Result<(), ConfigError> {
    let fits = rows > 0 && cols > 0 && rows.checked_mul(cols).is_some();
    if !fits {
        return Err(ConfigError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Check a full session configuration.
pub fn validate(config: &GameConfig) -> Result<(), ConfigError> {
    validate_dimensions(config.rows, config.cols)?;
    if config.moves <= 0 {
        return Err(ConfigError::InvalidMoves(config.moves));
    }
    if config.bomb_radius < 0 {
        return Err(ConfigError::InvalidBombRadius(config.bomb_radius));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate(&GameConfig::default()), Ok(()));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            validate_dimensions(0, 5),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            validate_dimensions(3, -1),
            Err(ConfigError::InvalidDimensions { rows: 3, cols: -1 })
        );
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        assert!(validate_dimensions(i32::MAX, 2).is_err());
    }

    #[test]
    fn rejects_bad_moves_and_radius() {
        let config = GameConfig {
            moves: 0,
            ..GameConfig::default()
        };
        assert_eq!(validate(&config), Err(ConfigError::InvalidMoves(0)));

        let config = GameConfig {
            bomb_radius: -2,
            ..GameConfig::default()
        };
        assert_eq!(validate(&config), Err(ConfigError::InvalidBombRadius(-2)));
    }
}
