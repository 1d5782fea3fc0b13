use bitflags::bitflags;
use glam::Vec2;

use crate::types::Rect;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MotionFlags: u8 {
        const NONE = 0;
        // Integrate velocity into position
        const MOVE = 1 << 0;
        // Point the actor angle along the velocity while moving
        const AUTO_ROTATE = 1 << 1;
        // Wrap the position into the world bounds
        const WRAP = 1 << 2;
    }
}

/// Motion
/// Per-actor velocity and acceleration state, integrated with an
/// explicit Euler step once per frame by the owner.
#[derive(Debug, Clone)]
pub struct Motion {
    pub flags: MotionFlags,
    pub vel: Vec2,
    /// acceleration magnitude used by the angle helpers
    pub acceleration: f32,
    /// linear speed decay applied on frames with no acceleration
    pub deceleration: f32,
    /// speed cap, 0 disables the cap
    pub max_speed: f32,
    /// world rect used by WRAP
    pub bounds: Option<Rect>,
    accel: Vec2,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            flags: MotionFlags::MOVE,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            acceleration: 0.0,
            deceleration: 0.0,
            max_speed: 0.0,
            bounds: None,
        }
    }
}

impl Motion {
    /// Accumulate an acceleration for this frame
    pub fn accelerate(&mut self, accel: Vec2) {
        self.accel += accel;
    }

    /// Accelerate by `acceleration` toward the given angle (radians)
    pub fn accelerate_at_angle(&mut self, angle: f32) {
        self.accel += Vec2::from_angle(angle) * self.acceleration;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Set speed without changing the motion direction.
    /// A resting actor starts moving along the positive x axis.
    pub fn set_speed(&mut self, speed: f32) {
        if self.vel == Vec2::ZERO {
            self.vel = Vec2::new(speed, 0.0);
        } else {
            self.vel = self.vel.normalize() * speed;
        }
    }

    /// Direction of motion in radians
    pub fn motion_angle(&self) -> f32 {
        self.vel.to_angle()
    }

    /// Redirect the current speed toward the given angle
    pub fn set_motion_angle(&mut self, angle: f32) {
        self.vel = Vec2::from_angle(angle) * self.speed();
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// One Euler step. Applies accumulated acceleration, decays speed on
    /// coasting frames, caps speed preserving direction, then moves the
    /// position. The acceleration accumulator is cleared afterwards.
    pub fn integrate(&mut self, tick: f32, pos: &mut Vec2, angle: &mut f32) {
        if !self.flags.contains(MotionFlags::MOVE) {
            self.accel = Vec2::ZERO;
            return;
        }

        let coasting = self.accel == Vec2::ZERO;
        self.vel += self.accel * tick;

        let mut speed = self.vel.length();
        if coasting {
            speed = (speed - self.deceleration * tick).max(0.0);
        }
        if self.max_speed > 0.0 {
            speed = speed.min(self.max_speed);
        }
        if self.vel != Vec2::ZERO {
            self.vel = self.vel.normalize() * speed;
        }

        *pos += self.vel * tick;

        if self.flags.contains(MotionFlags::AUTO_ROTATE) && speed > 0.0 {
            *angle = self.vel.to_angle();
        }
        if self.flags.contains(MotionFlags::WRAP) {
            if let Some(bounds) = &self.bounds {
                wrap_pos(pos, bounds);
            }
        }

        self.accel = Vec2::ZERO;
    }
}

fn wrap_pos(pos: &mut Vec2, bounds: &Rect) {
    let size = bounds.size();
    if size.x > 0.0 {
        if pos.x < bounds.min.x {
            pos.x += size.x;
        } else if pos.x > bounds.max.x {
            pos.x -= size.x;
        }
    }
    if size.y > 0.0 {
        if pos.y < bounds.min.y {
            pos.y += size.y;
        } else if pos.y > bounds.max.y {
            pos.y -= size.y;
        }
    }
}
