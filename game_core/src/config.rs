use crate::params::Params;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("jump_impulse must be negative (upward), got {0}")]
    JumpNotUpward(f32),

    #[error("spawn_chance must be within 0.0..=1.0, got {0}")]
    SpawnChanceOutOfRange(f64),

    #[error("min_spawn_interval ({min}) exceeds base_spawn_interval ({base})")]
    SpawnIntervalOrder { min: u32, base: u32 },

    #[error("max_speed ({max}) is below base_speed ({base})")]
    SpeedOrder { base: f32, max: f32 },

    #[error("actor does not fit above the ground band")]
    ActorDoesNotFit,

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game configuration
///
/// Every field falls back to its [`Params`] value when missing from JSON, so a
/// host can override only what it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_band_height: f32,
    pub actor_x: f32,
    pub actor_size: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_jump_height: f32,
    pub ground_tolerance: f32,
    pub obstacle_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_height_range: f32,
    pub spawn_chance: f64,
    pub base_spawn_interval: u32,
    pub min_spawn_interval: u32,
    pub spawn_ramp_ticks: u32,
    pub first_obstacle_delay_ticks: u32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub speed_ramp_ticks: u32,
    pub score_interval: u32,
    pub tick_interval_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            ground_band_height: Params::GROUND_BAND_HEIGHT,
            actor_x: Params::ACTOR_X,
            actor_size: Params::ACTOR_SIZE,
            gravity: Params::GRAVITY,
            jump_impulse: Params::JUMP_IMPULSE,
            max_jump_height: Params::MAX_JUMP_HEIGHT,
            ground_tolerance: Params::GROUND_TOLERANCE,
            obstacle_width: Params::OBSTACLE_WIDTH,
            obstacle_min_height: Params::OBSTACLE_MIN_HEIGHT,
            obstacle_height_range: Params::OBSTACLE_HEIGHT_RANGE,
            spawn_chance: Params::SPAWN_CHANCE,
            base_spawn_interval: Params::BASE_SPAWN_INTERVAL,
            min_spawn_interval: Params::MIN_SPAWN_INTERVAL,
            spawn_ramp_ticks: Params::SPAWN_RAMP_TICKS,
            first_obstacle_delay_ticks: Params::FIRST_OBSTACLE_DELAY_TICKS,
            base_speed: Params::BASE_SPEED,
            max_speed: Params::MAX_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            speed_ramp_ticks: Params::SPEED_RAMP_TICKS,
            score_interval: Params::SCORE_INTERVAL,
            tick_interval_ms: Params::TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive_f32 = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("actor_size", self.actor_size),
            ("gravity", self.gravity),
            ("max_jump_height", self.max_jump_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_min_height", self.obstacle_min_height),
            ("base_speed", self.base_speed),
        ];
        for (field, value) in positive_f32 {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive {
                    field,
                    value: value as f64,
                });
            }
        }

        let non_negative_f32 = [
            ("obstacle_height_range", self.obstacle_height_range),
            ("speed_increment", self.speed_increment),
            ("ground_tolerance", self.ground_tolerance),
        ];
        for (field, value) in non_negative_f32 {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative {
                    field,
                    value: value as f64,
                });
            }
        }

        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }

        let positive_u32 = [
            ("min_spawn_interval", self.min_spawn_interval),
            ("spawn_ramp_ticks", self.spawn_ramp_ticks),
            ("speed_ramp_ticks", self.speed_ramp_ticks),
            ("score_interval", self.score_interval),
        ];
        for (field, value) in positive_u32 {
            if value == 0 {
                return Err(ConfigError::NotPositive {
                    field,
                    value: 0.0,
                });
            }
        }

        if !(self.tick_interval_ms > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "tick_interval_ms",
                value: self.tick_interval_ms,
            });
        }

        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::SpawnChanceOutOfRange(self.spawn_chance));
        }

        if self.min_spawn_interval > self.base_spawn_interval {
            return Err(ConfigError::SpawnIntervalOrder {
                min: self.min_spawn_interval,
                base: self.base_spawn_interval,
            });
        }

        if self.max_speed < self.base_speed {
            return Err(ConfigError::SpeedOrder {
                base: self.base_speed,
                max: self.max_speed,
            });
        }

        if self.ground_level() < 0.0 || self.ground_band_height < 0.0 {
            return Err(ConfigError::ActorDoesNotFit);
        }

        Ok(())
    }

    /// Y of the top of the ground band; obstacles stand on this line
    pub fn ground_y(&self) -> f32 {
        self.canvas_height - self.ground_band_height
    }

    /// Resting Y of the actor's top edge
    pub fn ground_level(&self) -> f32 {
        self.ground_y() - self.actor_size
    }

    /// Highest point (smallest Y) the actor may reach while ascending
    pub fn jump_ceiling(&self) -> f32 {
        (self.ground_level() - self.max_jump_height).max(0.0)
    }

    /// Ticks between spawn attempts at the given frame
    pub fn spawn_interval(&self, frame: u32) -> u32 {
        let ramp = frame / self.spawn_ramp_ticks;
        self.base_spawn_interval
            .saturating_sub(ramp)
            .max(self.min_spawn_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_ground_level() {
        let config = Config::new();
        assert_eq!(config.ground_y(), 150.0, "Ground line sits above the band");
        assert_eq!(config.ground_level(), 110.0, "Actor rests on the ground line");
        assert_eq!(config.jump_ceiling(), 10.0);
    }

    #[test]
    fn test_spawn_interval_ramps_down_to_floor() {
        let config = Config::new();
        assert_eq!(config.spawn_interval(0), 150);
        assert_eq!(config.spawn_interval(199), 150);
        assert_eq!(config.spawn_interval(200), 149);
        assert_eq!(config.spawn_interval(2_000), 140);
        assert_eq!(config.spawn_interval(18_000), 60, "Floored at the minimum");
        assert_eq!(config.spawn_interval(u32::MAX), 60);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let config = Config::from_json(r#"{ "base_speed": 3.5, "spawn_chance": 1.0 }"#)
            .expect("Partial override should parse");
        assert_eq!(config.base_speed, 3.5);
        assert_eq!(config.spawn_chance, 1.0);
        assert_eq!(config.gravity, Params::GRAVITY, "Missing fields keep defaults");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            spawn_chance: 1.5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnChanceOutOfRange(_))
        ));

        let config = Config {
            min_spawn_interval: 200,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnIntervalOrder { min: 200, base: 150 })
        ));

        let config = Config {
            max_speed: 1.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::SpeedOrder { .. })));

        let config = Config {
            jump_impulse: 4.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::JumpNotUpward(_))
        ));

        let config = Config {
            score_interval: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "score_interval",
                ..
            })
        ));

        let config = Config {
            actor_size: 400.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ActorDoesNotFit)));
    }

    #[test]
    fn test_negative_ranges_rejected() {
        let err = Config::from_json(r#"{ "obstacle_height_range": -100 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "obstacle_height_range",
                ..
            }
        ));

        let err = Config::from_json(r#"{ "speed_increment": -0.1 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "speed_increment",
                ..
            }
        ));

        let config = Config {
            obstacle_height_range: 0.0,
            speed_increment: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok(), "Flat heights and speed are allowed");
    }
}
