use crate::{Config, Events, GameState};

/// Award one point every `score_interval` ticks
pub fn update_score(state: &mut GameState, config: &Config, events: &mut Events) {
    if state.frame % config.score_interval == 0 {
        state.score += 1;
        events.scored = true;
    }
}
