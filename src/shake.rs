use glam::Vec2;
use rand::Rng;

/// Shaker state. While shaking the actor chases jittered waypoints
/// around the anchor, then walks back to the anchor and goes idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Shaking { remaining: u32 },
    Returning,
}

/// Shaker
/// Positional shake effect: the owning actor moves at constant speed
/// toward randomly jittered waypoints near an anchor position, and
/// returns to the anchor exactly after a fixed count of waypoints.
#[derive(Debug, Clone)]
pub struct Shaker {
    /// movement speed in units per second
    pub speed: f32,
    /// max jitter per axis around the anchor
    pub intensity: f32,
    anchor: Vec2,
    target: Vec2,
    state: State,
}

impl Default for Shaker {
    fn default() -> Self {
        Shaker {
            speed: 240.0,
            intensity: 8.0,
            anchor: Vec2::ZERO,
            target: Vec2::ZERO,
            state: State::Idle,
        }
    }
}

impl Shaker {
    pub fn new(speed: f32, intensity: f32) -> Self {
        Shaker {
            speed,
            intensity,
            ..Default::default()
        }
    }

    /// Begin shaking around the given position for `count` waypoints.
    /// Restarting while already shaking keeps the original anchor so the
    /// actor can not drift.
    pub fn start(&mut self, pos: Vec2, count: u32) {
        if self.state == State::Idle {
            self.anchor = pos;
        }
        if count == 0 {
            self.target = self.anchor;
            self.state = State::Returning;
            return;
        }
        self.target = self.next_target();
        self.state = State::Shaking { remaining: count };
    }

    pub fn is_active(&self) -> bool {
        self.state != State::Idle
    }

    fn next_target(&self) -> Vec2 {
        if self.intensity <= 0.0 {
            return self.anchor;
        }
        let mut rng = rand::thread_rng();
        let jitter = Vec2::new(
            rng.gen_range(-self.intensity..=self.intensity),
            rng.gen_range(-self.intensity..=self.intensity),
        );
        self.anchor + jitter
    }

    /// Advance one frame, moving `pos` toward the current waypoint.
    /// Arrival tolerance is one integration step, which prevents
    /// oscillating around a waypoint.
    pub fn step(&mut self, tick: f32, pos: &mut Vec2) {
        if self.state == State::Idle {
            return;
        }

        let step = self.speed * tick;
        let delta = self.target - *pos;
        if delta.length() > step {
            *pos += delta.normalize() * step;
            return;
        }

        // arrived at the waypoint
        *pos = self.target;
        match self.state {
            State::Shaking { remaining } if remaining > 1 => {
                self.target = self.next_target();
                self.state = State::Shaking {
                    remaining: remaining - 1,
                };
            }
            State::Shaking { .. } => {
                self.target = self.anchor;
                self.state = State::Returning;
            }
            State::Returning => {
                *pos = self.anchor;
                self.state = State::Idle;
            }
            State::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intensity_returns_home() {
        let mut shaker = Shaker::new(100.0, 0.0);
        let mut pos = Vec2::new(7.0, 3.0);
        shaker.start(pos, 3);
        assert!(shaker.is_active());
        // every waypoint equals the anchor, so each step consumes one
        for _ in 0..4 {
            shaker.step(0.016, &mut pos);
        }
        assert!(!shaker.is_active());
        assert_eq!(pos, Vec2::new(7.0, 3.0));
    }

    #[test]
    fn test_waypoints_stay_in_range() {
        let mut shaker = Shaker::new(1000.0, 5.0);
        let anchor = Vec2::new(50.0, 50.0);
        let mut pos = anchor;
        shaker.start(pos, 8);
        for _ in 0..200 {
            shaker.step(0.016, &mut pos);
            assert!((pos.x - anchor.x).abs() <= 5.0 + 1e-3);
            assert!((pos.y - anchor.y).abs() <= 5.0 + 1e-3);
        }
        assert!(!shaker.is_active());
        assert_eq!(pos, anchor);
    }

    #[test]
    fn test_restart_keeps_anchor() {
        let mut shaker = Shaker::new(100.0, 0.0);
        let mut pos = Vec2::ZERO;
        shaker.start(pos, 2);
        shaker.step(0.016, &mut pos);
        // restart mid-shake from a displaced position
        shaker.start(Vec2::new(99.0, 99.0), 2);
        while shaker.is_active() {
            shaker.step(0.016, &mut pos);
        }
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_zero_count_degenerates_to_return() {
        let mut shaker = Shaker::new(100.0, 4.0);
        let mut pos = Vec2::new(1.0, 0.0);
        shaker.start(pos, 0);
        shaker.step(1.0, &mut pos);
        assert!(!shaker.is_active());
        assert_eq!(pos, Vec2::new(1.0, 0.0));
    }
}
