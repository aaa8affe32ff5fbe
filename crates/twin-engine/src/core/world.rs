use glam::Vec2;

use crate::core::body::{Body, BodyKind};
use crate::core::outcome::TickOutcome;
use crate::core::platform::Platform;
use crate::core::tuning::Tuning;

/// The two blocks plus the active platform sequence.
///
/// Bodies are stored in a fixed order (red, blue) and resolved in that order
/// every tick, so pushing and riding are reproducible.
#[derive(Debug, Clone)]
pub struct World {
    bodies: [Body; 2],
    platforms: Vec<Platform>,
}

impl World {
    pub fn new(red_spawn: Vec2, blue_spawn: Vec2, platforms: Vec<Platform>) -> Self {
        Self {
            bodies: [
                Body::new(BodyKind::Red, red_spawn),
                Body::new(BodyKind::Blue, blue_spawn),
            ],
            platforms,
        }
    }

    /// A world with no platforms and both blocks at the origin.
    pub fn empty() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, Vec::new())
    }

    pub fn body(&self, kind: BodyKind) -> &Body {
        &self.bodies[kind.index()]
    }

    pub fn body_mut(&mut self, kind: BodyKind) -> &mut Body {
        &mut self.bodies[kind.index()]
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// The goal platform, if the sequence is non-empty.
    pub fn goal(&self) -> Option<&Platform> {
        self.platforms.last().filter(|p| p.goal)
    }

    /// Run one simulation tick: red fully (fall check, then update), then blue.
    pub fn step(&mut self, tuning: &Tuning) -> TickOutcome {
        let mut outcome = TickOutcome::new();
        let [red, blue] = &mut self.bodies;

        resolve(red, blue, &self.platforms, tuning, &mut outcome);
        resolve(blue, red, &self.platforms, tuning, &mut outcome);

        outcome.both_done = red.done && blue.done;
        outcome
    }
}

fn resolve(
    body: &mut Body,
    other: &mut Body,
    platforms: &[Platform],
    tuning: &Tuning,
    outcome: &mut TickOutcome,
) {
    body.check_fall(platforms, other, tuning, outcome);
    body.update(other, tuning, outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::LossCause;
    use crate::core::platform::PlatformKind;

    fn ground() -> Platform {
        Platform::new(Vec2::new(0.0, 490.0), 500.0, 5.0, PlatformKind::Neutral)
    }

    #[test]
    fn both_blocks_settle_flush_on_ground() {
        let t = Tuning::default();
        let mut world = World::new(
            Vec2::new(250.0, 400.0),
            Vec2::new(100.0, 433.0),
            vec![ground(), Platform::goal(Vec2::new(200.0, 100.0), 100.0, 5.0)],
        );

        for _ in 0..200 {
            let out = world.step(&t);
            assert!(!out.is_lost());
        }

        for body in world.bodies() {
            assert!(!body.falling);
            assert!((body.pos.y + t.body_size - 490.0).abs() < 1e-3, "y = {}", body.pos.y);
            assert_eq!(body.vy, 0.0);
        }
    }

    #[test]
    fn fall_speed_never_passes_cap() {
        let t = Tuning::default();
        let mut world = World::new(Vec2::new(100.0, 0.0), Vec2::new(300.0, 0.0), vec![ground()]);
        for _ in 0..300 {
            world.step(&t);
            for body in world.bodies() {
                assert!(body.vy >= -t.max_fall_speed - t.gravity - 1e-4);
            }
        }
    }

    #[test]
    fn both_done_requires_both_on_goal() {
        let t = Tuning::default();
        let goal = Platform::goal(Vec2::new(200.0, 100.0), 100.0, 5.0);

        let mut one = World::new(
            Vec2::new(210.0, 80.0),
            Vec2::new(10.0, 470.0),
            vec![ground(), goal.clone()],
        );
        let out = one.step(&t);
        assert!(one.body(BodyKind::Red).done);
        assert!(!out.both_done);

        let mut both = World::new(Vec2::new(210.0, 80.0), Vec2::new(260.0, 80.0), vec![ground(), goal]);
        let out = both.step(&t);
        assert!(out.both_done);
    }

    #[test]
    fn blue_resolves_after_red() {
        let t = Tuning::default();
        // red is pushed by blue on blue's turn; red has already moved this tick
        let mut world = World::new(Vec2::new(100.0, 470.0), Vec2::new(121.0, 470.0), vec![ground()]);
        world.body_mut(BodyKind::Red).set_right(true);
        world.body_mut(BodyKind::Blue).set_left(true);

        world.step(&t);

        // red: +1.5 (pushes blue +1.5), blue: -1.5 (pushes red -1.5)
        assert_eq!(world.body(BodyKind::Red).pos.x, 100.0);
        assert_eq!(world.body(BodyKind::Blue).pos.x, 121.0);
    }

    #[test]
    fn forbidden_floor_ends_run() {
        let t = Tuning::default();
        let mut world = World::new(
            Vec2::new(100.0, 470.0),
            Vec2::new(300.0, 470.0),
            vec![
                Platform::new(Vec2::new(250.0, 490.0), 100.0, 5.0, PlatformKind::RedOnly),
                Platform::new(Vec2::new(0.0, 490.0), 200.0, 5.0, PlatformKind::Neutral),
            ],
        );
        let out = world.step(&t);
        assert_eq!(out.loss(), Some(LossCause::ForbiddenLanding));
    }

    #[test]
    fn goal_is_last_platform() {
        let world = World::new(
            Vec2::ZERO,
            Vec2::ZERO,
            vec![ground(), Platform::goal(Vec2::new(200.0, 100.0), 100.0, 5.0)],
        );
        assert_eq!(world.goal().map(|p| p.pos), Some(Vec2::new(200.0, 100.0)));
        assert!(World::empty().goal().is_none());
    }
}
