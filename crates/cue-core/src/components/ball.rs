use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed category of a ball, set at rack time and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallRole {
    Cue,
    Red,
    Blue,
    Black,
}

impl BallRole {
    /// Whether this is one of the two scoring colors.
    pub fn is_color(self) -> bool {
        matches!(self, BallRole::Red | BallRole::Blue)
    }

    /// The opposing scoring color (Red ↔ Blue); identity for Cue/Black.
    pub fn rival_color(self) -> BallRole {
        match self {
            BallRole::Red => BallRole::Blue,
            BallRole::Blue => BallRole::Red,
            other => other,
        }
    }
}

/// Bitmask of cushion faces contacted in one tick.
/// A corner contact sets one horizontal and one vertical bit at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallMask(u8);

impl WallMask {
    pub const NONE: WallMask = WallMask(0);
    /// Minimum-x cushion.
    pub const WEST: WallMask = WallMask(1);
    /// Maximum-x cushion.
    pub const EAST: WallMask = WallMask(1 << 1);
    /// Minimum-y cushion.
    pub const NORTH: WallMask = WallMask(1 << 2);
    /// Maximum-y cushion.
    pub const SOUTH: WallMask = WallMask(1 << 3);

    pub fn contains(self, face: WallMask) -> bool {
        face.0 != 0 && self.0 & face.0 == face.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, face: WallMask) {
        self.0 |= face.0;
    }
}

/// A single ball on (or off) the table.
///
/// Positions are table-space coordinates with the origin at the outer
/// top-left wall corner; velocity is in units per tick.
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    role: BallRole,
    /// Grab point the shot is drawn from. Present only mid-aim, and only
    /// ever set on the cue ball.
    pub(crate) aim: Option<Vec2>,
    /// Off the table after being sunk; skipped by every physics pass.
    pub(crate) pocketed: bool,
}

impl Ball {
    pub fn new(position: Vec2, role: BallRole) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            role,
            aim: None,
            pocketed: false,
        }
    }

    pub fn role(&self) -> BallRole {
        self.role
    }

    pub fn is_pocketed(&self) -> bool {
        self.pocketed
    }

    pub fn is_aiming(&self) -> bool {
        self.aim.is_some()
    }

    /// A ball counts as moving while its speed exceeds the per-tick
    /// friction decrement; anything at or below that would be eaten by
    /// friction this tick anyway.
    pub fn is_moving(&self, friction_per_tick: f32) -> bool {
        !self.pocketed && self.velocity.length() > friction_per_tick
    }

    /// Advance one tick: translate by velocity, then shave the friction
    /// decrement off the speed along the direction of travel. The
    /// `is_moving` guard means the subtraction can never flip the sign.
    pub fn step(&mut self, friction_per_tick: f32) {
        if !self.is_moving(friction_per_tick) {
            return;
        }
        self.position += self.velocity;
        self.velocity -= friction_per_tick * self.velocity.normalize_or_zero();
    }

    /// Reflect off any cushion whose boundary the ball's edge has reached
    /// (equality counts as contact) while still traveling into it. The two
    /// axes are tested independently, so a corner contact flips both
    /// components in the same tick.
    ///
    /// `min`/`max` bound the playfield interior; the ball center may come
    /// no closer to a cushion than `radius`.
    pub fn reflect_off_walls(&mut self, min: Vec2, max: Vec2, radius: f32) -> WallMask {
        let mut mask = WallMask::NONE;

        if self.position.x <= min.x + radius && self.velocity.x <= 0.0 {
            self.velocity.x = -self.velocity.x;
            mask.insert(WallMask::WEST);
        } else if self.position.x >= max.x - radius && self.velocity.x >= 0.0 {
            self.velocity.x = -self.velocity.x;
            mask.insert(WallMask::EAST);
        }

        if self.position.y <= min.y + radius && self.velocity.y <= 0.0 {
            self.velocity.y = -self.velocity.y;
            mask.insert(WallMask::NORTH);
        } else if self.position.y >= max.y - radius && self.velocity.y >= 0.0 {
            self.velocity.y = -self.velocity.y;
            mask.insert(WallMask::SOUTH);
        }

        mask
    }
}
