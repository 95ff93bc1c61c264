use crate::{Actor, Config, Events, GameMap, Obstacle};

/// Start a jump if the actor is standing on the ground
///
/// Returns false (and changes nothing) while airborne.
pub fn try_jump(actor: &mut Actor, map: &GameMap, config: &Config) -> bool {
    if !actor.is_grounded(map, config) {
        return false;
    }
    actor.vy = config.jump_impulse;
    actor.airborne = true;
    true
}

/// Apply gravity, integrate position and settle on the ground
pub fn move_actor(actor: &mut Actor, map: &GameMap, config: &Config, events: &mut Events) {
    if actor.y < map.ground_level || actor.vy < 0.0 {
        actor.vy += config.gravity;
        actor.y += actor.vy;

        // Cap the arc: ascent stops dead at the ceiling, descent is free fall
        if actor.y <= map.ceiling && actor.vy < 0.0 {
            actor.y = map.ceiling;
            actor.vy = 0.0;
        }
        actor.y = map.clamp_y(actor.y);
    }

    if actor.y >= map.ground_level {
        if actor.airborne {
            events.landed = true;
        }
        actor.y = map.ground_level;
        actor.vy = 0.0;
        actor.airborne = false;
    }
}

/// Scroll obstacles left by the current game speed
pub fn scroll_obstacles(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}
