//! Session state owned by the engine

use crate::{Actor, Config, GameMap, Obstacle};
use serde::{Deserialize, Serialize};

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Over,
}

/// The single authoritative simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>, // Spawn order
    pub game_speed: f32,
    pub frame: u32,
    pub score: u32,
    pub phase: Phase,
    /// Ticks left before the opening obstacle is placed
    pub first_spawn_in: Option<u32>,
}

impl GameState {
    /// Fresh idle state: actor on the ground, nothing on screen
    pub fn new(map: &GameMap, config: &Config) -> Self {
        Self {
            actor: Actor::new(map.ground_level),
            obstacles: Vec::new(),
            game_speed: config.base_speed,
            frame: 0,
            score: 0,
            phase: Phase::Idle,
            first_spawn_in: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            frame: self.frame,
            game_speed: self.game_speed,
            actor_y: self.actor.y,
            airborne: self.actor.airborne,
            obstacle_count: self.obstacles.len(),
        }
    }
}

/// Read-only view handed to the host after each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: u32,
    pub frame: u32,
    pub game_speed: f32,
    pub actor_y: f32,
    pub airborne: bool,
    pub obstacle_count: usize,
}
