pub mod clock;
pub mod components;
pub mod config;
pub mod engine;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use engine::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::{render, Color, DrawCommand, Frame};
pub use resources::*;
pub use state::*;

use rand::RngCore;
use systems::*;

/// Advance the runner simulation by one fixed tick
///
/// No-op unless the session is running. Returns the final score when this
/// tick ended the session.
pub fn step<R: RngCore>(
    state: &mut GameState,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
    rng: &mut R,
) -> Option<u32> {
    // Clear events at start of tick
    events.clear();

    if !state.is_running() {
        return None;
    }

    // 1. Advance the clock
    state.frame += 1;

    // 2. Score is a pure function of elapsed ticks
    update_score(state, config, events);

    // 3-4. Gravity, integration, ceiling clamp, landing
    move_actor(&mut state.actor, map, config, events);

    // 5. Scroll and drop obstacles past the left edge
    scroll_obstacles(&mut state.obstacles, state.game_speed);
    despawn_offscreen(&mut state.obstacles, events);

    // 6. Spawning
    place_opening_obstacle(state, map, config, rng, events);
    spawn_obstacles(state, map, config, rng, events);

    // 7. Difficulty
    ramp_speed(state, config, events);

    // 8. Collisions
    check_collisions(state, map, config, events);

    events.game_over
}
