use crate::{Events, Obstacle};

/// Garbage collection: drop obstacles that scrolled past the left edge
pub fn despawn_offscreen(obstacles: &mut Vec<Obstacle>, events: &mut Events) {
    let before = obstacles.len();
    obstacles.retain(|obstacle| !obstacle.is_off_screen());
    let removed = before - obstacles.len();

    if removed > 0 {
        log::trace!("despawned {removed} obstacle(s)");
    }
    events.obstacles_despawned += removed;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_only_fully_offscreen() {
        let mut obstacles = vec![
            Obstacle::new(-20.0, 20.0, 30.0), // right edge at 0
            Obstacle::new(-19.0, 20.0, 30.0), // still 1px visible
            Obstacle::new(400.0, 20.0, 45.0),
        ];
        let mut events = Events::new();

        despawn_offscreen(&mut obstacles, &mut events);

        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].x, -19.0, "Spawn order is preserved");
        assert_eq!(obstacles[1].x, 400.0);
        assert_eq!(events.obstacles_despawned, 1);
    }

    #[test]
    fn test_nothing_to_remove() {
        let mut obstacles = vec![Obstacle::new(5.0, 20.0, 30.0)];
        let mut events = Events::new();
        despawn_offscreen(&mut obstacles, &mut events);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(events.obstacles_despawned, 0);
    }
}
