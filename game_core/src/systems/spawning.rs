use rand::{Rng, RngCore};

use crate::{Config, Events, GameMap, GameState, Obstacle};

/// Roll a new obstacle at the right edge with a random height
pub fn new_obstacle<R: RngCore>(map: &GameMap, config: &Config, rng: &mut R) -> Obstacle {
    let height = config.obstacle_min_height + rng.gen::<f32>() * config.obstacle_height_range;
    Obstacle::new(map.obstacle_spawn_x(), config.obstacle_width, height)
}

/// Count down the opening obstacle and place it if the screen is still empty
pub fn place_opening_obstacle<R: RngCore>(
    state: &mut GameState,
    map: &GameMap,
    config: &Config,
    rng: &mut R,
    events: &mut Events,
) {
    let Some(remaining) = state.first_spawn_in else {
        return;
    };

    if remaining > 1 {
        state.first_spawn_in = Some(remaining - 1);
        return;
    }

    state.first_spawn_in = None;
    if state.obstacles.is_empty() {
        let obstacle = new_obstacle(map, config, rng);
        log::debug!("opening obstacle at frame {} (h={:.1})", state.frame, obstacle.height);
        state.obstacles.push(obstacle);
        events.obstacle_spawned = true;
    }
}

/// Periodic spawn: probabilistic, forced when the screen is empty
pub fn spawn_obstacles<R: RngCore>(
    state: &mut GameState,
    map: &GameMap,
    config: &Config,
    rng: &mut R,
    events: &mut Events,
) {
    let interval = config.spawn_interval(state.frame);
    if state.frame % interval != 0 {
        return;
    }

    // Roll first so the rng stream does not depend on screen contents
    let lucky = rng.gen_bool(config.spawn_chance);
    if !lucky && !state.obstacles.is_empty() {
        return;
    }

    let obstacle = new_obstacle(map, config, rng);
    log::debug!(
        "spawned obstacle at frame {} (interval={}, h={:.1})",
        state.frame,
        interval,
        obstacle.height
    );
    state.obstacles.push(obstacle);
    events.obstacle_spawned = true;
}
