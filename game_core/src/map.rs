use crate::Config;
use glam::Vec2;

/// Axis-aligned bounding box in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size, canvas `fillRect` style
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only share an edge do not touch
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playfield lines derived once from [`Config`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    /// Top of the ground band; obstacles stand here
    pub ground_y: f32,
    /// Resting Y of the actor's top edge
    pub ground_level: f32,
    /// Smallest Y the actor reaches while ascending
    pub ceiling: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            ground_y: config.ground_y(),
            ground_level: config.ground_level(),
            ceiling: config.jump_ceiling(),
        }
    }

    /// X at which new obstacles enter (right edge of the canvas)
    pub fn obstacle_spawn_x(&self) -> f32 {
        self.width
    }

    /// Keep the actor between the canvas top and the ground
    pub fn clamp_y(&self, y: f32) -> f32 {
        y.min(self.ground_level).max(0.0)
    }
}
