use crate::{Config, Events, GameMap, GameState, Phase};

/// Test the actor against every obstacle; the first hit ends the session
///
/// All obstacles are examined every tick. Only the first overlap flips the
/// phase and records the final score, later hits in the same tick see `Over`
/// and are ignored. Returns the index of the obstacle that ended the session.
pub fn check_collisions(
    state: &mut GameState,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> Option<usize> {
    let actor_rect = state.actor.rect(config);
    let mut hit = None;

    for (index, obstacle) in state.obstacles.iter().enumerate() {
        if !actor_rect.overlaps(&obstacle.rect(map.ground_y)) {
            continue;
        }
        if state.phase == Phase::Running {
            state.phase = Phase::Over;
            events.game_over = Some(state.score);
            hit = Some(index);
        }
    }

    hit
}
