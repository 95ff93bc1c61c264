use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded random number generator used for spawn decisions
#[derive(Debug, Clone)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub scored: bool,
    pub landed: bool,
    pub obstacle_spawned: bool,
    pub obstacles_despawned: usize,
    pub speed_increased: bool,
    pub game_over: Option<u32>, // Final score
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = false;
        self.landed = false;
        self.obstacle_spawned = false;
        self.obstacles_despawned = 0;
        self.speed_increased = false;
        self.game_over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored = true;
        events.landed = true;
        events.obstacle_spawned = true;
        events.obstacles_despawned = 2;
        events.speed_increased = true;
        events.game_over = Some(12);

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen::<f32>(), b.gen::<f32>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        let left: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let right: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_ne!(left, right);
    }
}
