use crate::{Config, Events, GameState};

/// Speed ramp, the only difficulty knob: a fixed bump every few ticks
pub fn ramp_speed(state: &mut GameState, config: &Config, events: &mut Events) {
    if state.frame % config.speed_ramp_ticks != 0 {
        return;
    }

    let next = (state.game_speed + config.speed_increment).min(config.max_speed);
    if next > state.game_speed {
        log::debug!("speed {:.2} -> {:.2} at frame {}", state.game_speed, next, state.frame);
        state.game_speed = next;
        events.speed_increased = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMap;

    fn setup() -> (Config, GameState, Events) {
        let config = Config::new();
        let state = GameState::new(&GameMap::new(&config), &config);
        (config, state, Events::new())
    }

    #[test]
    fn test_speed_only_changes_on_ramp_ticks() {
        let (config, mut state, mut events) = setup();
        state.frame = 99;
        ramp_speed(&mut state, &config, &mut events);
        assert_eq!(state.game_speed, config.base_speed);

        state.frame = 100;
        ramp_speed(&mut state, &config, &mut events);
        assert!((state.game_speed - 2.1).abs() < 1e-5);
        assert!(events.speed_increased);
    }

    #[test]
    fn test_speed_capped_at_max() {
        let (config, mut state, mut events) = setup();
        state.game_speed = config.max_speed - 0.05;
        state.frame = 100;
        ramp_speed(&mut state, &config, &mut events);
        assert_eq!(state.game_speed, config.max_speed);

        events.clear();
        state.frame = 200;
        ramp_speed(&mut state, &config, &mut events);
        assert_eq!(state.game_speed, config.max_speed);
        assert!(!events.speed_increased, "No event once capped");
    }
}
