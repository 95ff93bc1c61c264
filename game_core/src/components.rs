use crate::{Aabb, Config, GameMap};

/// Actor - the player-controlled dinosaur
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub y: f32,        // Top edge, clamped to [0, ground_level]
    pub vy: f32,       // Negative = moving up
    pub airborne: bool,
}

impl Actor {
    /// New actor resting on the ground
    pub fn new(ground_level: f32) -> Self {
        Self {
            y: ground_level,
            vy: 0.0,
            airborne: false,
        }
    }

    /// True when standing close enough to the ground to jump
    pub fn is_grounded(&self, map: &GameMap, config: &Config) -> bool {
        !self.airborne && self.y >= map.ground_level - config.ground_tolerance
    }

    pub fn rect(&self, config: &Config) -> Aabb {
        Aabb::from_xywh(config.actor_x, self.y, config.actor_size, config.actor_size)
    }
}

/// Obstacle - a scrolling cactus standing on the ground line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32, // Left edge
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, width: f32, height: f32) -> Self {
        Self { x, width, height }
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Fully scrolled past the left edge of the playfield
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() <= 0.0
    }

    pub fn rect(&self, ground_y: f32) -> Aabb {
        Aabb::from_xywh(self.x, ground_y - self.height, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_starts_grounded() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let actor = Actor::new(map.ground_level);
        assert_eq!(actor.y, 110.0);
        assert!(actor.is_grounded(&map, &config));
    }

    #[test]
    fn test_airborne_actor_is_not_grounded() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut actor = Actor::new(map.ground_level);
        actor.airborne = true;
        assert!(!actor.is_grounded(&map, &config));

        actor.airborne = false;
        actor.y = map.ground_level - 5.0;
        assert!(!actor.is_grounded(&map, &config), "Too far above ground");
    }

    #[test]
    fn test_obstacle_rect_stands_on_ground() {
        let obstacle = Obstacle::new(800.0, 20.0, 30.0);
        let rect = obstacle.rect(150.0);
        assert_eq!(rect.min.y, 120.0);
        assert_eq!(rect.max.y, 150.0);
        assert_eq!(rect.max.x, 820.0);
    }

    #[test]
    fn test_obstacle_off_screen_boundary() {
        assert!(!Obstacle::new(-19.5, 20.0, 30.0).is_off_screen());
        assert!(Obstacle::new(-20.0, 20.0, 30.0).is_off_screen());
        assert!(Obstacle::new(-25.0, 20.0, 30.0).is_off_screen());
    }
}
