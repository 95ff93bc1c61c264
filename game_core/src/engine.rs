//! The game engine: single owner of the session state
//!
//! The host drives it with `start` / `jump` / `frame` (or `tick` + `render`
//! directly) and learns about the end of a session either through the
//! game-over handler or by draining [`Engine::take_game_over`].

use rand::RngCore;

use crate::input::{action_for_key, Action};
use crate::render::{render, Frame};
use crate::systems::try_jump;
use crate::{
    step, Config, ConfigError, Events, FrameClock, GameMap, GameRng, GameState, Phase, Snapshot,
};

/// Called synchronously, once per session, with the final score
pub type GameOverHandler = Box<dyn FnMut(u32)>;

pub struct Engine<R: RngCore = GameRng> {
    config: Config,
    map: GameMap,
    state: GameState,
    events: Events,
    rng: R,
    clock: FrameClock,
    on_game_over: Option<GameOverHandler>,
    pending_game_over: Option<u32>,
}

impl Engine<GameRng> {
    /// Engine with a seeded [`GameRng`]
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RngCore> Engine<R> {
    /// Engine with an injected random source
    ///
    /// Rejects configs the systems cannot run with (zero intervals, inverted
    /// ranges), so every later operation is total.
    pub fn with_rng(config: Config, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let map = GameMap::new(&config);
        let state = GameState::new(&map, &config);
        let clock = FrameClock::new(config.tick_interval_ms);
        Ok(Self {
            config,
            map,
            state,
            events: Events::new(),
            rng,
            clock,
            on_game_over: None,
            pending_game_over: None,
        })
    }

    pub fn set_game_over_handler(&mut self, handler: impl FnMut(u32) + 'static) {
        self.on_game_over = Some(Box::new(handler));
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events recorded by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Begin a new session from `Idle` or `Over`
    pub fn start(&mut self) {
        if self.state.is_running() {
            return;
        }

        self.state = GameState::new(&self.map, &self.config);
        self.state.phase = Phase::Running;
        self.state.first_spawn_in = Some(self.config.first_obstacle_delay_ticks.max(1));
        self.events.clear();
        self.pending_game_over = None;
        log::info!("session started");
    }

    /// Jump if running and standing on the ground; otherwise no-op
    pub fn jump(&mut self) {
        if !self.state.is_running() {
            return;
        }
        if try_jump(&mut self.state.actor, &self.map, &self.config) {
            log::trace!("jump at frame {}", self.state.frame);
        }
    }

    /// Drop the current session and return to `Idle`
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.map, &self.config);
        self.events.clear();
        self.pending_game_over = None;
        log::info!("session reset");
    }

    /// Advance the simulation by one fixed step
    pub fn tick(&mut self) {
        let Some(final_score) = step(
            &mut self.state,
            &self.map,
            &self.config,
            &mut self.events,
            &mut self.rng,
        ) else {
            return;
        };

        log::info!(
            "game over at frame {} with score {}",
            self.state.frame,
            final_score
        );
        self.pending_game_over = Some(final_score);
        if let Some(handler) = self.on_game_over.as_mut() {
            handler(final_score);
        }
    }

    /// Describe the current state as a frame; never mutates
    pub fn render(&self) -> Frame {
        render(&self.state, &self.map, &self.config)
    }

    /// One display refresh: an optional tick, then an unconditional render
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        if self.state.is_running() && self.clock.ready(now_ms) {
            self.tick();
        }
        self.render()
    }

    /// The designated input (space / up arrow): start, jump or reset
    ///
    /// Returns the action taken, `None` for keys the game ignores.
    pub fn handle_key(&mut self, key: &str) -> Option<Action> {
        let action = action_for_key(key, self.state.phase)?;
        match action {
            Action::Start => self.start(),
            Action::Jump => self.jump(),
            Action::Reset => self.reset(),
        }
        Some(action)
    }

    /// One-shot game-over notification for hosts that poll
    pub fn take_game_over(&mut self) -> Option<u32> {
        self.pending_game_over.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Obstacle;
    use rand::rngs::mock::StepRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine() -> Engine<StepRng> {
        Engine::with_rng(Config::new(), StepRng::new(0, 0)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_before_ticking() {
        for config in [
            Config {
                score_interval: 0,
                ..Config::default()
            },
            Config {
                speed_ramp_ticks: 0,
                ..Config::default()
            },
            Config {
                spawn_ramp_ticks: 0,
                ..Config::default()
            },
            Config {
                min_spawn_interval: 0,
                ..Config::default()
            },
        ] {
            let result = Engine::new(config.clone(), 1);
            assert!(
                matches!(result, Err(ConfigError::NotPositive { .. })),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_starts_idle() {
        let engine = engine();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut engine = engine();
        let before = engine.state().clone();
        engine.tick();
        engine.jump();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_start_resets_and_runs() {
        let mut engine = engine();
        engine.start();
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.state().first_spawn_in, Some(6));
        assert!(engine.state().obstacles.is_empty());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut engine = engine();
        engine.start();
        for _ in 0..10 {
            engine.tick();
        }
        let before = engine.state().clone();
        engine.start();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_opening_obstacle_appears_shortly_after_start() {
        let mut engine = engine();
        engine.start();
        for _ in 0..5 {
            engine.tick();
        }
        assert!(engine.state().obstacles.is_empty());
        engine.tick();
        assert_eq!(engine.state().obstacles.len(), 1);
        assert!(engine.events().obstacle_spawned);
    }

    #[test]
    fn test_handler_called_once_and_take_drains() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);

        let mut engine = engine();
        engine.set_game_over_handler(move |score| sink.borrow_mut().push(score));
        engine.start();
        engine.state.obstacles.push(Obstacle::new(95.0, 20.0, 30.0));

        for _ in 0..20 {
            engine.tick();
        }

        assert_eq!(engine.phase(), Phase::Over);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(engine.take_game_over(), Some(calls.borrow()[0]));
        assert_eq!(engine.take_game_over(), None, "Notification is one-shot");
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = engine();
        engine.start();
        engine.state.obstacles.push(Obstacle::new(60.0, 20.0, 30.0));
        engine.tick();
        assert_eq!(engine.phase(), Phase::Over);

        engine.start();
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state().frame, 0);
        assert_eq!(engine.take_game_over(), None);
    }

    #[test]
    fn test_reset_returns_to_idle_without_notifying() {
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);

        let mut engine = engine();
        engine.set_game_over_handler(move |_| *sink.borrow_mut() += 1);
        engine.start();
        for _ in 0..50 {
            engine.tick();
        }
        engine.reset();

        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.score(), 0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_handle_key_cycles_phases() {
        let mut engine = engine();
        assert_eq!(engine.handle_key(" "), Some(Action::Start));
        assert_eq!(engine.phase(), Phase::Running);

        assert_eq!(engine.handle_key("ArrowUp"), Some(Action::Jump));
        assert!(engine.state().actor.airborne);

        // Still low enough on the first airborne tick to clip this cactus
        engine.state.obstacles.push(Obstacle::new(60.0, 20.0, 30.0));
        engine.tick();
        assert_eq!(engine.phase(), Phase::Over);

        assert_eq!(engine.handle_key("Space"), Some(Action::Reset));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.handle_key("x"), None);
    }

    #[test]
    fn test_frame_gates_ticks_on_clock() {
        let mut engine = engine();
        engine.start();
        let interval = engine.config().tick_interval_ms;

        engine.frame(interval);
        engine.frame(interval + 1.0);
        assert_eq!(engine.state().frame, 1, "Second refresh came too early");

        engine.frame(interval * 2.0 + 1.0);
        assert_eq!(engine.state().frame, 2);
    }

    #[test]
    fn test_frame_renders_when_not_running() {
        let mut engine = engine();
        let frame = engine.frame(1_000.0);
        assert_eq!(engine.state().frame, 0);
        assert_eq!(frame, engine.render());
    }

    #[test]
    fn test_snapshot_tracks_state() {
        let mut engine = engine();
        engine.start();
        for _ in 0..10 {
            engine.tick();
        }
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.frame, 10);
        assert_eq!(snapshot.score, 2);
    }
}
